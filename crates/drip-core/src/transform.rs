//! Transform layer — normalises raw readings into unit-suffixed records.
//!
//! The rename is the contract: raw `temperature` surfaces as
//! `temperature_celsius` and raw `humidity` as `humidity_percent`. Values
//! pass through numerically unchanged; the suffix documents the unit, it
//! does not convert it.

use crate::types::{keys, RawReading, Record};
use serde_json::Value;
use std::collections::BTreeMap;

/// Normalise one raw reading into a [`Record`].
///
/// Every canonical key is present in the output. Timestamps are rendered as
/// RFC 3339 strings in UTC.
pub fn transform_reading(reading: &RawReading) -> Record {
    let mut fields = BTreeMap::new();
    fields.insert(keys::SENSOR_ID.to_string(), Value::from(reading.sensor_id));
    fields.insert(keys::READING_ID.to_string(), Value::from(reading.reading_id));
    fields.insert(
        keys::TEMPERATURE_CELSIUS.to_string(),
        Value::from(reading.temperature),
    );
    fields.insert(
        keys::HUMIDITY_PERCENT.to_string(),
        Value::from(reading.humidity),
    );
    fields.insert(
        keys::TIMESTAMP_UTC.to_string(),
        Value::from(
            reading
                .timestamp
                .to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true),
        ),
    );
    Record { fields }
}

/// Normalise a batch of readings.
///
/// Exactly one record per input reading, in input order.
pub fn transform_readings(readings: &[RawReading]) -> Vec<Record> {
    readings.iter().map(transform_reading).collect()
}
