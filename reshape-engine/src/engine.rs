//! FILENAME: reshape-engine/src/engine.rs
//! Reshape Engine - Turns a host dataset into dimension and metric series.
//!
//! Algorithm:
//! 1. Absent dataset or absent dimension list -> empty result
//! 2. Apply the row-length policy (and optional type validation)
//! 3. Dimension descriptor `i` collects cell `i` of every row
//! 4. Metric descriptor `j` collects cell `D + j` of every row
//!
//! Cells are cloned through untouched. Rows are never skipped, reordered,
//! filtered or aggregated, so every series is exactly `rows.len()` long.

use engine::{CellValue, ColumnDescriptor, Row, TabularDataset};

use crate::definition::{ReshapeOptions, RowLengthPolicy};
use crate::error::ReshapeError;
use crate::validation::validate;
use crate::view::{ReshapedResult, Series};

/// Reshapes with default options: short rows yield `Empty` cells and
/// nothing ever fails.
pub fn reshape(dataset: Option<&TabularDataset>) -> ReshapedResult {
    let Some(dataset) = dataset else {
        return ReshapedResult::empty();
    };
    let Some(dimensions) = dataset.dimension_descriptors.as_deref() else {
        return ReshapedResult::empty();
    };
    tolerate_mismatches(dataset);
    build_result(dimensions, dataset.metric_descriptors.as_deref(), &dataset.rows)
}

/// Reshapes under explicit options.
///
/// Incomplete input still yields `Ok(empty)`. Errors only come from the
/// `Reject` row policy or from enabled column type validation.
pub fn reshape_with(
    dataset: Option<&TabularDataset>,
    options: &ReshapeOptions,
) -> Result<ReshapedResult, ReshapeError> {
    let Some(dataset) = dataset else {
        return Ok(ReshapedResult::empty());
    };
    let Some(dimensions) = dataset.dimension_descriptors.as_deref() else {
        return Ok(ReshapedResult::empty());
    };

    if options.validate_column_types {
        let report = validate(dataset);
        if report.has_type_mismatch() {
            crate::log_warn!(
                "RESHAPE",
                "column type validation failed with {} issue(s)",
                report.issues().len()
            );
            return Err(ReshapeError::Validation(report));
        }
    }

    match options.row_length_policy {
        RowLengthPolicy::Tolerate => tolerate_mismatches(dataset),
        RowLengthPolicy::Reject => reject_mismatches(dataset)?,
    }

    Ok(build_result(
        dimensions,
        dataset.metric_descriptors.as_deref(),
        &dataset.rows,
    ))
}

fn tolerate_mismatches(dataset: &TabularDataset) {
    if !log::log_enabled!(target: "RESHAPE", log::Level::Debug) {
        return;
    }
    let expected = dataset.expected_row_len();
    for (row, cells) in dataset.rows.iter().enumerate() {
        if cells.len() != expected {
            crate::log_debug!(
                "RESHAPE",
                "row {} has {} cells, expected {}; tolerating",
                row,
                cells.len(),
                expected
            );
        }
    }
}

fn reject_mismatches(dataset: &TabularDataset) -> Result<(), ReshapeError> {
    let expected = dataset.expected_row_len();
    match dataset
        .rows
        .iter()
        .position(|cells| cells.len() != expected)
    {
        Some(row) => Err(ReshapeError::RowLength {
            row,
            expected,
            actual: dataset.rows[row].len(),
        }),
        None => Ok(()),
    }
}

fn build_result(
    dimensions: &[ColumnDescriptor],
    metrics: Option<&[ColumnDescriptor]>,
    rows: &[Row],
) -> ReshapedResult {
    let dim_count = dimensions.len();

    let dimension_series = extract_series(dimensions, 0, rows);
    let metric_series = match metrics {
        Some(metrics) => extract_series(metrics, dim_count, rows),
        None => Vec::new(),
    };

    crate::log_debug!(
        "RESHAPE",
        "reshaped {} row(s) into {} dimension and {} metric series",
        rows.len(),
        dimension_series.len(),
        metric_series.len()
    );

    ReshapedResult {
        dimension_series,
        metric_series,
    }
}

/// One series per descriptor; descriptor `k` reads cell `offset + k`.
fn extract_series(descriptors: &[ColumnDescriptor], offset: usize, rows: &[Row]) -> Vec<Series> {
    descriptors
        .iter()
        .enumerate()
        .map(|(k, descriptor)| {
            let mut series = Series::for_descriptor(descriptor, rows.len());
            series
                .values
                .extend(rows.iter().map(|row| cell_at(row, offset + k)));
            series
        })
        .collect()
}

#[inline]
fn cell_at(row: &Row, index: usize) -> CellValue {
    row.get(index).cloned().unwrap_or(CellValue::Empty)
}
