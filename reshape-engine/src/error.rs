//! FILENAME: reshape-engine/src/error.rs

use thiserror::Error;

use crate::validation::ValidationReport;

#[derive(Error, Debug)]
pub enum ReshapeError {
    #[error("Row {row} has {actual} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Dataset failed validation with {} issue(s)", .0.issues().len())]
    Validation(ValidationReport),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
