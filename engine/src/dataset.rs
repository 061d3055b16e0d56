//! FILENAME: engine/src/dataset.rs
//! PURPOSE: The tabular dataset a dashboard host hands over on each draw.
//! CONTEXT: Rows carry dimension cells first and metric cells after, in the
//! same order as the two descriptor lists. The host may omit either list
//! (no data yet), which is why both are optional.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cell::{CellKind, CellValue};

/// Inline capacity of a row before it spills to the heap.
pub const ROW_INLINE_CELLS: usize = 8;

/// One host row: dimension cells, then metric cells.
pub type Row = SmallVec<[CellValue; ROW_INLINE_CELLS]>;

/// Declared kind of the cells in a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    Text,
    Number,
    Boolean,
    /// Accepts every cell kind.
    Any,
}

impl Default for ColumnType {
    fn default() -> Self {
        ColumnType::Any
    }
}

impl ColumnType {
    /// Whether a cell of `kind` is acceptable in a column of this type.
    /// Empty cells are always accepted.
    pub fn accepts(&self, kind: CellKind) -> bool {
        match (self, kind) {
            (_, CellKind::Empty) => true,
            (ColumnType::Any, _) => true,
            (ColumnType::Text, CellKind::Text) => true,
            (ColumnType::Number, CellKind::Number) => true,
            (ColumnType::Boolean, CellKind::Boolean) => true,
            _ => false,
        }
    }
}

/// Identifies one dimension or metric column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    /// Host field id (e.g., "qt_abc123").
    pub id: String,

    /// Display name used as a label by renderers.
    pub name: String,

    /// Optional declared cell kind, checked only by boundary validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_type: Option<ColumnType>,
}

impl ColumnDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        ColumnDescriptor {
            id: id.into(),
            name: name.into(),
            column_type: None,
        }
    }

    pub fn typed(id: impl Into<String>, name: impl Into<String>, column_type: ColumnType) -> Self {
        ColumnDescriptor {
            id: id.into(),
            name: name.into(),
            column_type: Some(column_type),
        }
    }
}

/// A host dataset: descriptor lists plus positional rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabularDataset {
    #[serde(default)]
    pub dimension_descriptors: Option<Vec<ColumnDescriptor>>,

    #[serde(default)]
    pub metric_descriptors: Option<Vec<ColumnDescriptor>>,

    #[serde(default)]
    pub rows: Vec<Row>,
}

impl TabularDataset {
    pub fn new(
        dimension_descriptors: Vec<ColumnDescriptor>,
        metric_descriptors: Vec<ColumnDescriptor>,
        rows: Vec<Row>,
    ) -> Self {
        TabularDataset {
            dimension_descriptors: Some(dimension_descriptors),
            metric_descriptors: Some(metric_descriptors),
            rows,
        }
    }

    /// A dataset with dimensions only; the metric list is absent.
    pub fn dimensions_only(dimension_descriptors: Vec<ColumnDescriptor>, rows: Vec<Row>) -> Self {
        TabularDataset {
            dimension_descriptors: Some(dimension_descriptors),
            metric_descriptors: None,
            rows,
        }
    }

    pub fn dimension_count(&self) -> usize {
        self.dimension_descriptors.as_ref().map_or(0, Vec::len)
    }

    pub fn metric_count(&self) -> usize {
        self.metric_descriptors.as_ref().map_or(0, Vec::len)
    }

    /// Number of cells a well-formed row carries.
    pub fn expected_row_len(&self) -> usize {
        self.dimension_count() + self.metric_count()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Builds a row from anything convertible into cells.
pub fn row<I, T>(cells: I) -> Row
where
    I: IntoIterator<Item = T>,
    T: Into<CellValue>,
{
    cells.into_iter().map(Into::into).collect()
}
