//! FILENAME: reshape-engine/src/definition.rs
//! Reshape Options - The serializable configuration.
//!
//! Describes HOW a dataset is reshaped when the host hands it over:
//! - what to do with rows whose length does not match the descriptors
//! - whether declared column types are checked first
//!
//! Every field has a default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};

use crate::error::ReshapeError;

/// What to do with a row whose cell count differs from the descriptor count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowLengthPolicy {
    /// Missing cells become `Empty`, extra cells are ignored.
    Tolerate,
    /// The first mismatched row fails the whole reshape.
    Reject,
}

impl Default for RowLengthPolicy {
    fn default() -> Self {
        RowLengthPolicy::Tolerate
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReshapeOptions {
    #[serde(default)]
    pub row_length_policy: RowLengthPolicy,

    /// Run boundary validation and fail on any type mismatch.
    #[serde(default)]
    pub validate_column_types: bool,
}

impl ReshapeOptions {
    pub fn from_json(json: &str) -> Result<Self, ReshapeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_row_length_policy(mut self, policy: RowLengthPolicy) -> Self {
        self.row_length_policy = policy;
        self
    }

    pub fn with_column_type_validation(mut self, enabled: bool) -> Self {
        self.validate_column_types = enabled;
        self
    }
}
