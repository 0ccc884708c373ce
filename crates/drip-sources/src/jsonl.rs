//! JSONL file source — one reading object per line.
//!
//! Lines deserialize straight into [`RawReading`] (RFC 3339 timestamps).
//! Blank lines are skipped; anything else that fails to parse aborts the
//! extraction with its line number.

use drip_core::{RawReading, ReadingSource, SourceError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// Reads raw readings out of a JSON-lines file.
pub struct JsonlSource {
    path: PathBuf,
}

impl JsonlSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReadingSource for JsonlSource {
    fn describe(&self) -> String {
        format!("jsonl:{}", self.path.display())
    }

    fn extract(&self) -> Result<Vec<RawReading>, SourceError> {
        let file = File::open(&self.path)?;
        let mut readings = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let reading: RawReading =
                serde_json::from_str(&line).map_err(|err| SourceError::Row {
                    line: index as u64 + 1,
                    reason: err.to_string(),
                })?;
            readings.push(reading);
        }

        tracing::debug!(
            path = %self.path.display(),
            rows = readings.len(),
            "jsonl extraction complete"
        );
        Ok(readings)
    }
}
