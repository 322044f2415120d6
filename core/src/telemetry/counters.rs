//! telemetry/counters.rs
//! Mutable counters collected while decoding.

use std::ops::AddAssign;
use serde::{Deserialize, Serialize};

/// Deterministic counters collected during chunk decoding.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderCounters {
    pub chunks: u64,
    pub bytes_fed: u64,
    pub bytes_consumed: u64,
    pub containers: u64,
    pub audio_blocks: u64,
    /// Audio blocks skipped because they belong to another track.
    pub filtered_blocks: u64,
    /// Opaque and metadata leaves advanced past.
    pub skipped_elements: u64,
    pub bytes_skipped: u64,
    /// Samples per channel emitted.
    pub frames_decoded: u64,
}

impl DecoderCounters {
    /// Record one non-empty chunk handed to the decoder.
    pub fn add_chunk(&mut self, len: usize) {
        self.chunks += 1;
        self.bytes_fed += len as u64;
    }

    /// Record a container header (its children are counted separately).
    pub fn add_container(&mut self, header_len: usize) {
        self.containers += 1;
        self.bytes_consumed += header_len as u64;
    }

    /// Record one decoded audio block.
    ///
    /// - `element_len`: header + payload bytes
    /// - `frames`: samples per channel in the block
    pub fn add_audio(&mut self, element_len: u64, frames: usize) {
        self.audio_blocks += 1;
        self.frames_decoded += frames as u64;
        self.bytes_consumed += element_len;
    }

    /// Record an audio block dropped by the track filter.
    pub fn add_filtered(&mut self, element_len: u64) {
        self.filtered_blocks += 1;
        self.bytes_consumed += element_len;
    }

    /// Record a skipped leaf.
    ///
    /// - `element_len`: bytes dropped now; for a leaf larger than the buffered
    ///   input the rest follows through [`add_skip_progress`](Self::add_skip_progress)
    pub fn add_skipped(&mut self, element_len: u64) {
        self.skipped_elements += 1;
        self.add_skip_progress(element_len);
    }

    /// Record further bytes of a leaf that is being skipped across chunks.
    pub fn add_skip_progress(&mut self, len: u64) {
        self.bytes_skipped += len;
        self.bytes_consumed += len;
    }

    pub fn merge(&mut self, other: &DecoderCounters) {
        self.chunks += other.chunks;
        self.bytes_fed += other.bytes_fed;
        self.bytes_consumed += other.bytes_consumed;
        self.containers += other.containers;
        self.audio_blocks += other.audio_blocks;
        self.filtered_blocks += other.filtered_blocks;
        self.skipped_elements += other.skipped_elements;
        self.bytes_skipped += other.bytes_skipped;
        self.frames_decoded += other.frames_decoded;
    }
}

impl AddAssign for DecoderCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
