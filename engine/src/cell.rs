//! FILENAME: engine/src/cell.rs
//! PURPOSE: Defines the value carried by a single cell of a host dataset.
//! CONTEXT: Host rows mix dimension labels and metric numbers by position.
//! `CellValue` makes that mix explicit as a tagged union so the reshaper can
//! pass cells through untouched while consumers still know what they hold.

use serde::{Deserialize, Serialize};

/// The kind of value a cell holds, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Empty,
    Number,
    Text,
    Boolean,
}

/// Represents the raw data within a cell.
///
/// Serialized untagged so it matches the host's JSON rows directly:
/// `null`, numbers, strings and booleans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Host null, or a position a short row never reached.
    Empty,
    Boolean(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn kind(&self) -> CellKind {
        match self {
            CellValue::Empty => CellKind::Empty,
            CellValue::Number(_) => CellKind::Number,
            CellValue::Text(_) => CellKind::Text,
            CellValue::Boolean(_) => CellKind::Boolean,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the display value of the cell as a String.
    /// Used by consumers that label axes or fill table cells.
    pub fn display_value(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => {
                // Format without unnecessary decimal places
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{:.0}", n)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Text(s) => s.clone(),
            CellValue::Boolean(b) => {
                if *b { "TRUE" } else { "FALSE" }.to_string()
            }
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Empty
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Boolean(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Empty)
    }
}
