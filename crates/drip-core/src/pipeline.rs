//! Pipeline — extract raw readings from a source, then normalise them.
//!
//! This is the whole ETL surface. Loading the records anywhere is the
//! caller's business; the binary just prints them.

use crate::source::{ReadingSource, SourceError};
use crate::transform;
use crate::types::{RawReading, Record};

/// Pull every reading out of `source`.
///
/// Length is greater than zero whenever the backing source has data; an
/// empty source is not an error, only a warning.
pub fn extract(source: &dyn ReadingSource) -> Result<Vec<RawReading>, SourceError> {
    let readings = source.extract()?;
    if readings.is_empty() {
        tracing::warn!(source = %source.describe(), "source produced no readings");
    } else {
        tracing::debug!(
            source = %source.describe(),
            rows = readings.len(),
            "extracted readings"
        );
    }
    Ok(readings)
}

/// Run the full pipeline: extract from `source`, then transform.
pub fn run(source: &dyn ReadingSource) -> Result<Vec<Record>, SourceError> {
    let raw = extract(source)?;
    Ok(transform::transform_readings(&raw))
}
