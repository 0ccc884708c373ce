//! Core types for drip-core — sensor reading ETL.
//!
//! This module defines the two data structures shared across the pipeline
//! layers: the raw [`RawReading`] produced by extraction and the normalised
//! [`Record`] produced by transformation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Canonical keys emitted by the transform layer.
///
/// Keys are unit-suffixed where a unit exists, so a record is self-describing
/// without a schema lookup.
pub mod keys {
    pub const SENSOR_ID: &str = "sensor_id";
    pub const READING_ID: &str = "reading_id";
    pub const TEMPERATURE_CELSIUS: &str = "temperature_celsius";
    pub const HUMIDITY_PERCENT: &str = "humidity_percent";
    pub const TIMESTAMP_UTC: &str = "timestamp_utc";
}

/// A raw sensor reading as handed back by a
/// [`ReadingSource`](crate::source::ReadingSource).
///
/// Field names double as the JSONL wire shape. A reading is immutable once
/// extracted; the transform layer maps it into a [`Record`] without touching
/// the original.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawReading {
    /// Identifier of the sensor that took the reading.
    pub sensor_id: u32,
    /// Per-reading identifier, unique within a sensor.
    pub reading_id: u64,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// When the reading was taken (UTC).
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// A normalised record produced by the transform layer.
///
/// A string-keyed mapping holding the canonical keys from [`keys`]. Backed by
/// a `BTreeMap` so key order is deterministic in JSON output and assertion
/// failures.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl Record {
    /// Whether the record carries `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Raw value lookup.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.fields.get(key)
    }

    /// Number of keys in the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The normalised temperature, if present and numeric.
    pub fn temperature_celsius(&self) -> Option<f64> {
        self.get(keys::TEMPERATURE_CELSIUS)?.as_f64()
    }

    /// The normalised humidity, if present and numeric.
    pub fn humidity_percent(&self) -> Option<f64> {
        self.get(keys::HUMIDITY_PERCENT)?.as_f64()
    }
}
