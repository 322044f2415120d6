//! decoder — incremental WebM/EBML chunk decoder.
//!
//! Responsibilities:
//! - Accept arbitrarily sized chunks and keep the unconsumed tail between calls
//! - Track open containers (known and unknown size) across chunk boundaries
//! - Collect audio track metadata and route audio blocks through content decoding
//! - Latch the first malformed-stream fault until `reset`
//!
//! Non-responsibilities:
//! - Seeking, cues, or any random access
//! - Codec decoding (samples are raw float PCM)

pub mod config;
pub mod state;
pub mod core;

pub use config::DecoderConfig;
pub use state::{
    NestingStack,
    OpenContainer,
    TrackAudioInfo,
};
pub use self::core::ChunkDecoder;
