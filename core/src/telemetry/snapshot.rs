//! telemetry/snapshot.rs
//! Immutable view of a decoder's counters and buffering state.

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::DecoderCounters;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecoderSnapshot {
    pub counters: DecoderCounters,
    /// Bytes buffered but not yet consumed.
    pub pending_bytes: usize,
    /// Open containers.
    pub depth: usize,
}

impl DecoderSnapshot {
    pub fn from(counters: &DecoderCounters, pending_bytes: usize, depth: usize) -> Self {
        Self { counters: counters.clone(), pending_bytes, depth }
    }

    /// Every fed byte is either consumed or pending.
    pub fn sanity_check(&self) -> bool {
        self.counters.bytes_fed == self.counters.bytes_consumed + self.pending_bytes as u64
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_roundtrip() {
        let counters = DecoderCounters { chunks: 2, bytes_fed: 10, bytes_consumed: 7, ..Default::default() };
        let snap = DecoderSnapshot::from(&counters, 3, 1);
        assert!(snap.sanity_check());

        let json = snap.to_json().unwrap();
        let back: DecoderSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
