//! FILENAME: reshape-engine/src/view.rs
//! Series View - The output handed to renderers.
//!
//! A `ReshapedResult` holds one `Series` per descriptor, dimension and
//! metric collections kept apart and in descriptor order. Renderers map
//! `values` onto axes, bars or table cells and use `name` as the label.

use serde::{Deserialize, Serialize};
use engine::{CellValue, ColumnDescriptor};

/// One column's values across all rows, with its display identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: String,
    pub name: String,
    pub values: Vec<CellValue>,
}

impl Series {
    pub fn new(id: impl Into<String>, name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Series {
            id: id.into(),
            name: name.into(),
            values,
        }
    }

    pub(crate) fn for_descriptor(descriptor: &ColumnDescriptor, capacity: usize) -> Self {
        Series {
            id: descriptor.id.clone(),
            name: descriptor.name.clone(),
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Numeric view for chart consumers. Non-number cells map to `None`;
    /// nothing is parsed from text.
    pub fn numbers(&self) -> Vec<Option<f64>> {
        self.values.iter().map(CellValue::as_number).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReshapedResult {
    pub dimension_series: Vec<Series>,
    pub metric_series: Vec<Series>,
}

impl ReshapedResult {
    /// The "no data available yet" result.
    pub fn empty() -> Self {
        ReshapedResult::default()
    }

    pub fn is_empty(&self) -> bool {
        self.dimension_series.is_empty() && self.metric_series.is_empty()
    }

    /// Number of rows the series span (0 when there are no series).
    pub fn row_count(&self) -> usize {
        self.dimension_series
            .first()
            .or_else(|| self.metric_series.first())
            .map_or(0, Series::len)
    }

    pub fn dimension(&self, id: &str) -> Option<&Series> {
        self.dimension_series.iter().find(|s| s.id == id)
    }

    pub fn metric(&self, id: &str) -> Option<&Series> {
        self.metric_series.iter().find(|s| s.id == id)
    }
}
