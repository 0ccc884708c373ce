//! Domain-specific assertion macros for drip harnesses.
//!
//! These add context-rich failure messages that make it clear *what*
//! pipeline invariant was violated and *where*.

use drip_core::{keys, Record};

// ---------------------------------------------------------------------------
// Record assertions
// ---------------------------------------------------------------------------

/// Assert that a `Record` has a specific key with an expected value.
///
/// ```rust
/// assert_record_field!(record, "temperature_celsius", 23.5);
/// ```
#[macro_export]
macro_rules! assert_record_field {
    ($record:expr, $key:expr, $value:expr) => {{
        let record: &drip_core::Record = &$record;
        let key: &str = $key;
        let expected = serde_json::json!($value);
        match record.get(key) {
            Some(actual) if *actual == expected => {}
            Some(actual) => panic!(
                "assert_record_field! failed:\n  record[{:?}]\n  expected: {}\n  actual:   {}",
                key, expected, actual
            ),
            None => panic!(
                "assert_record_field! failed: key {:?} not found in record.\n  Available keys: {:?}",
                key,
                record.fields.keys().collect::<Vec<_>>()
            ),
        }
    }};
}

/// Assert that a `Record` contains a key (any value).
#[macro_export]
macro_rules! assert_record_has_key {
    ($record:expr, $key:expr) => {{
        let record: &drip_core::Record = &$record;
        let key: &str = $key;
        if !record.contains_key(key) {
            panic!(
                "assert_record_has_key! failed: key {:?} not found.\n  Available: {:?}",
                key,
                record.fields.keys().collect::<Vec<_>>()
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Shape invariant helpers
// ---------------------------------------------------------------------------

/// Assert that a transformed `Record` carries every canonical key.
pub fn assert_canonical_shape(record: &Record) {
    for key in [
        keys::SENSOR_ID,
        keys::READING_ID,
        keys::TEMPERATURE_CELSIUS,
        keys::HUMIDITY_PERCENT,
        keys::TIMESTAMP_UTC,
    ] {
        assert!(
            record.contains_key(key),
            "transformed record is missing canonical key {:?}; has {:?}",
            key,
            record.fields.keys().collect::<Vec<_>>()
        );
    }
}

/// Assert that transformation preserved cardinality and order.
///
/// Order is checked via `reading_id`, which the corpus builders keep unique
/// and increasing.
pub fn assert_order_preserved(readings: &[drip_core::RawReading], records: &[Record]) {
    assert_eq!(
        readings.len(),
        records.len(),
        "transform must emit exactly one record per reading"
    );
    for (reading, record) in readings.iter().zip(records) {
        let got = record
            .get(keys::READING_ID)
            .and_then(|value| value.as_u64());
        assert_eq!(
            got,
            Some(reading.reading_id),
            "record out of order: expected reading_id {}",
            reading.reading_id
        );
    }
}
