//! In-memory source — a fixed set of readings, mainly for tests and benches.

use drip_core::{RawReading, ReadingSource, SourceError};

/// Hands back a pre-built `Vec<RawReading>`.
pub struct MemorySource {
    readings: Vec<RawReading>,
}

impl MemorySource {
    pub fn new(readings: Vec<RawReading>) -> Self {
        Self { readings }
    }
}

impl ReadingSource for MemorySource {
    fn describe(&self) -> String {
        format!("memory:{} readings", self.readings.len())
    }

    fn extract(&self) -> Result<Vec<RawReading>, SourceError> {
        Ok(self.readings.clone())
    }
}
