//! drip-core — sensor reading ETL core library.
//!
//! This crate exposes the pipeline layers as public modules, plus the shared
//! types used across all layers.
//!
//! # Architecture
//!
//! ```text
//! ReadingSource ──► extract ──► transform ──► Vec<Record>
//! ```
//!
//! Concrete sources implement the [`source::ReadingSource`] port (adapters
//! live in `drip-sources`). The pipeline is synchronous and single-threaded
//! end to end; there is no load step.

pub mod config;
pub mod pipeline;
pub mod source;
pub mod transform;
pub mod types;

pub use source::{ReadingSource, SourceError};
pub use types::{keys, RawReading, Record};
