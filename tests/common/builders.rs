//! Test builders — ergonomic constructors for `RawReading` fixtures.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::{DateTime, Duration, TimeZone, Utc};
use drip_core::RawReading;

// ---------------------------------------------------------------------------
// RawReadingBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`RawReading`] test fixtures.
///
/// # Example
///
/// ```rust
/// let reading = RawReadingBuilder::new(1, 1)
///     .temperature(23.5)
///     .humidity(60.2)
///     .build();
/// ```
pub struct RawReadingBuilder {
    sensor_id: u32,
    reading_id: u64,
    temperature: f64,
    humidity: f64,
    timestamp: DateTime<Utc>,
}

impl RawReadingBuilder {
    pub fn new(sensor_id: u32, reading_id: u64) -> Self {
        Self {
            sensor_id,
            reading_id,
            temperature: 21.0,
            humidity: 50.0,
            timestamp: Utc::now(),
        }
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn humidity(mut self, humidity: f64) -> Self {
        self.humidity = humidity;
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn build(self) -> RawReading {
        RawReading {
            sensor_id: self.sensor_id,
            reading_id: self.reading_id,
            temperature: self.temperature,
            humidity: self.humidity,
            timestamp: self.timestamp,
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// The single mock row exercised by the transform contract tests:
/// sensor 1, reading 1, 23.5 °C, 60.2 % RH, taken now.
pub fn mock_reading() -> RawReading {
    RawReadingBuilder::new(1, 1)
        .temperature(23.5)
        .humidity(60.2)
        .build()
}

/// Build a corpus of `n` readings spread over three sensors with
/// deterministic timestamps half a minute apart.
pub fn build_corpus(n: usize) -> Vec<RawReading> {
    let start = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
    (0..n)
        .map(|i| {
            RawReadingBuilder::new((i % 3) as u32 + 1, i as u64 + 1)
                .temperature(18.0 + (i % 12) as f64 * 0.5)
                .humidity(40.0 + (i % 30) as f64)
                .timestamp(start + Duration::seconds(30 * i as i64))
                .build()
        })
        .collect()
}
