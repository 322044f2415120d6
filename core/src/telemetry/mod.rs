//! telemetry/mod.rs
//! Decoder counters and immutable snapshots.
//!
//! Counters are mutated in place by the decoder; snapshots are taken on demand
//! and at `finish`, and serialize with serde for logs or JSON export.

pub mod counters;
pub mod snapshot;

pub use counters::*;
pub use snapshot::*;
