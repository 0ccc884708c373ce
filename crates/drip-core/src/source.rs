//! Source port — where raw readings come from.
//!
//! The pipeline only sees this trait; concrete adapters (CSV, JSONL,
//! in-memory) live in the `drip-sources` crate.

use crate::types::RawReading;

/// Errors surfaced while extracting readings from a source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("i/o error reading source: {0}")]
    Io(#[from] std::io::Error),

    /// A required column is absent from a tabular source's header row.
    #[error("source is missing required column {name:?}")]
    MissingColumn { name: &'static str },

    /// A row failed to parse. `line` is 1-based; 0 means the position was
    /// not recoverable.
    #[error("malformed row at line {line}: {reason}")]
    Row { line: u64, reason: String },

    /// A timestamp cell matched none of the accepted formats.
    #[error("unrecognised timestamp {value:?}")]
    Timestamp { value: String },
}

/// A backend that can produce raw sensor readings.
///
/// Extraction is eager and synchronous: one call returns every reading the
/// source currently holds, in source order.
pub trait ReadingSource {
    /// Human-readable description of the backing source, for logs.
    fn describe(&self) -> String;

    /// Pull every reading the source currently holds.
    fn extract(&self) -> Result<Vec<RawReading>, SourceError>;
}
