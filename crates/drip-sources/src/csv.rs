//! CSV file source.
//!
//! Expects a headered file with the columns `sensor_id`, `reading_id`,
//! `temperature`, `humidity`, and `timestamp`. Columns are resolved by header
//! name, so extra columns and reordering are fine. Timestamps accept RFC 3339
//! or naive date-times (taken as UTC).

use crate::time::parse_timestamp;
use drip_core::{RawReading, ReadingSource, SourceError};
use std::path::PathBuf;

const COLUMNS: [&str; 5] = [
    "sensor_id",
    "reading_id",
    "temperature",
    "humidity",
    "timestamp",
];

/// Reads raw readings out of a CSV file.
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReadingSource for CsvSource {
    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }

    fn extract(&self) -> Result<Vec<RawReading>, SourceError> {
        let mut reader = ::csv::ReaderBuilder::new()
            .trim(::csv::Trim::All)
            .from_path(&self.path)
            .map_err(csv_err)?;

        let headers = reader.headers().map_err(csv_err)?.clone();
        let mut columns = [0usize; COLUMNS.len()];
        for (slot, name) in COLUMNS.iter().enumerate() {
            columns[slot] = headers
                .iter()
                .position(|header| header == *name)
                .ok_or(SourceError::MissingColumn { name })?;
        }

        let mut readings = Vec::new();
        for result in reader.records() {
            let record = result.map_err(csv_err)?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            readings.push(parse_row(&record, &columns, line)?);
        }

        tracing::debug!(
            path = %self.path.display(),
            rows = readings.len(),
            "csv extraction complete"
        );
        Ok(readings)
    }
}

fn parse_row(
    record: &::csv::StringRecord,
    columns: &[usize; COLUMNS.len()],
    line: u64,
) -> Result<RawReading, SourceError> {
    let cell = |slot: usize| record.get(columns[slot]).unwrap_or("");
    Ok(RawReading {
        sensor_id: parse_cell(cell(0), COLUMNS[0], line)?,
        reading_id: parse_cell(cell(1), COLUMNS[1], line)?,
        temperature: parse_cell(cell(2), COLUMNS[2], line)?,
        humidity: parse_cell(cell(3), COLUMNS[3], line)?,
        timestamp: parse_timestamp(cell(4)).map_err(|err| SourceError::Row {
            line,
            reason: err.to_string(),
        })?,
    })
}

fn parse_cell<T>(raw: &str, column: &str, line: u64) -> Result<T, SourceError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|err| SourceError::Row {
        line,
        reason: format!("column {column}: {err}"),
    })
}

fn csv_err(err: ::csv::Error) -> SourceError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    let reason = err.to_string();
    match err.into_kind() {
        ::csv::ErrorKind::Io(io) => SourceError::Io(io),
        _ => SourceError::Row { line, reason },
    }
}
