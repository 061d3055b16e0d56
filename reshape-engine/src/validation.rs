//! FILENAME: reshape-engine/src/validation.rs
//! Boundary validation for host datasets.
//!
//! Reshaping trusts positional alignment. This pass checks that trust
//! before reshaping, without changing anything:
//! - descriptor ids are unique within their own list
//! - cells agree with the declared `ColumnType` of their column
//! - every row carries exactly one cell per descriptor

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use engine::{CellKind, CellValue, ColumnDescriptor, ColumnType, TabularDataset};

/// Which descriptor list an issue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DescriptorKind {
    Dimension,
    Metric,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationIssue {
    DuplicateId {
        kind: DescriptorKind,
        id: String,
    },
    TypeMismatch {
        kind: DescriptorKind,
        /// Position of the column within its own descriptor list.
        column: usize,
        row: usize,
        expected: ColumnType,
        found: CellKind,
    },
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has_type_mismatch(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i, ValidationIssue::TypeMismatch { .. }))
    }

    fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }
}

/// Checks a dataset and reports every issue found, in discovery order:
/// duplicate ids first, then row by row.
pub fn validate(dataset: &TabularDataset) -> ValidationReport {
    let mut report = ValidationReport::default();

    let dimensions = dataset.dimension_descriptors.as_deref().unwrap_or(&[]);
    let metrics = dataset.metric_descriptors.as_deref().unwrap_or(&[]);

    check_unique_ids(dimensions, DescriptorKind::Dimension, &mut report);
    check_unique_ids(metrics, DescriptorKind::Metric, &mut report);

    let expected = dataset.expected_row_len();
    let dim_count = dimensions.len();

    for (row_index, row) in dataset.rows.iter().enumerate() {
        if row.len() != expected {
            report.push(ValidationIssue::RowLength {
                row: row_index,
                expected,
                actual: row.len(),
            });
        }

        check_cells(dimensions, DescriptorKind::Dimension, 0, row, row_index, &mut report);
        check_cells(metrics, DescriptorKind::Metric, dim_count, row, row_index, &mut report);
    }

    report
}

fn check_unique_ids(
    descriptors: &[ColumnDescriptor],
    kind: DescriptorKind,
    report: &mut ValidationReport,
) {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut reported: FxHashSet<&str> = FxHashSet::default();
    for descriptor in descriptors {
        let id = descriptor.id.as_str();
        if !seen.insert(id) && reported.insert(id) {
            report.push(ValidationIssue::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_cells(
    descriptors: &[ColumnDescriptor],
    kind: DescriptorKind,
    offset: usize,
    row: &[CellValue],
    row_index: usize,
    report: &mut ValidationReport,
) {
    for (column, descriptor) in descriptors.iter().enumerate() {
        let Some(expected) = descriptor.column_type else {
            continue;
        };
        // Missing cells are a row-length issue, not a type issue
        let Some(cell) = row.get(offset + column) else {
            continue;
        };
        let found = cell.kind();
        if !expected.accepts(found) {
            report.push(ValidationIssue::TypeMismatch {
                kind,
                column,
                row: row_index,
                expected,
                found,
            });
        }
    }
}
