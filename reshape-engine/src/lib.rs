//! FILENAME: reshape-engine/src/lib.rs
//! Series reshaping subsystem for dashboard hosts.
//!
//! This crate turns a host's positional tabular dataset into named
//! dimension and metric series for renderers. It depends on `engine`
//! only for the shared data model (CellValue, ColumnDescriptor,
//! TabularDataset).
//!
//! Layers:
//! - `definition`: Serializable configuration (how to treat bad rows)
//! - `validation`: Boundary checks before trusting positions
//! - `view`: Output series for the renderer (WHAT we draw)
//! - `engine`: The reshape itself (HOW we extract)
//! - `host`: Payload decoding and the injected renderer seam

pub mod logging;

pub mod definition;
pub mod engine;
pub mod error;
pub mod host;
pub mod validation;
pub mod view;

pub use crate::definition::{ReshapeOptions, RowLengthPolicy};
pub use crate::engine::{reshape, reshape_with};
pub use crate::error::ReshapeError;
pub use crate::host::{decode_payload, HostAdapter, SeriesConsumer};
pub use crate::validation::{validate, DescriptorKind, ValidationIssue, ValidationReport};
pub use crate::view::{ReshapedResult, Series};
