//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the shared tabular data model.
//! CONTEXT: Re-exports public types for use by the reshape engine and by
//! host adapters.

pub mod cell;
pub mod dataset;

// Re-export commonly used types at the crate root
pub use cell::{CellKind, CellValue};
pub use dataset::{row, ColumnDescriptor, ColumnType, Row, TabularDataset, ROW_INLINE_CELLS};

#[cfg(test)]
mod tests;
