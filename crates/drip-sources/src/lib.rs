//! drip-sources — reading source adapters for drip.
//!
//! Each adapter implements [`drip_core::ReadingSource`]: it opens a backing
//! store, parses raw rows, and hands back [`drip_core::RawReading`] values
//! for the transform layer.

pub mod csv;
pub mod jsonl;
pub mod memory;
mod time;

pub use csv::CsvSource;
pub use jsonl::JsonlSource;
pub use memory::MemorySource;
