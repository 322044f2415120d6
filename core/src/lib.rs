//! webm-pcm-core
//!
//! Incremental decoder for WebM/EBML streams carrying float PCM audio.
//! Bytes go in as arbitrarily sized chunks, deinterleaved channel pairs come out.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod view;

// Wire layer
pub mod ebml;

// Stream layer
pub mod decoder;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::decoder::{ChunkDecoder, DecoderConfig, TrackAudioInfo};
    pub use crate::ebml::content::{BlockFraming, ChannelPair, SampleFormat};
    pub use crate::telemetry::{DecoderCounters, DecoderSnapshot};
    pub use crate::types::DecodeError;
}
