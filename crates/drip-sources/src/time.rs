//! Timestamp parsing shared by the file-based sources.

use chrono::{DateTime, NaiveDateTime, Utc};
use drip_core::SourceError;

/// Naive formats accepted after RFC 3339 fails; naive timestamps are taken
/// as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, SourceError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }
    Err(SourceError::Timestamp {
        value: value.to_string(),
    })
}
