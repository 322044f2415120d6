use crate::constants::{DEFAULT_MAX_PENDING_BYTES, MAX_CHANNELS};
use crate::ebml::content::{BlockFraming, SampleFormat};
use crate::types::DecodeError;

/// Decoder settings. Fields left as `None` are taken from the stream's track
/// metadata when present, otherwise from the defaults in `constants`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// 1 or 2. `None` reads the `Channels` element.
    pub channels: Option<u8>,
    /// `None` reads the `BitDepth` element.
    pub sample_format: Option<SampleFormat>,
    pub framing: BlockFraming,
    /// Only decode blocks of this track. `None` follows the audio track
    /// declared in `Tracks`, or decodes every block if there is none.
    pub track_number: Option<u64>,
    /// Largest tail the decoder will hold while waiting for an element.
    /// Applies to audio blocks and metadata leaves, which must arrive whole;
    /// opaque elements are discarded as their bytes arrive.
    pub max_pending_bytes: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            channels: None,
            sample_format: None,
            framing: BlockFraming::Matroska,
            track_number: None,
            max_pending_bytes: DEFAULT_MAX_PENDING_BYTES,
        }
    }
}

impl DecoderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payloads are bare interleaved samples with no block header.
    pub fn raw() -> Self {
        Self { framing: BlockFraming::Raw, ..Self::default() }
    }

    pub fn with_channels(mut self, channels: u8) -> Self {
        self.channels = Some(channels);
        self
    }

    pub fn with_sample_format(mut self, format: SampleFormat) -> Self {
        self.sample_format = Some(format);
        self
    }

    pub fn with_framing(mut self, framing: BlockFraming) -> Self {
        self.framing = framing;
        self
    }

    pub fn with_track_number(mut self, track: u64) -> Self {
        self.track_number = Some(track);
        self
    }

    pub fn with_max_pending_bytes(mut self, limit: usize) -> Self {
        self.max_pending_bytes = limit;
        self
    }

    pub fn validate(&self) -> Result<(), DecodeError> {
        if let Some(ch) = self.channels {
            if ch == 0 || ch > MAX_CHANNELS {
                return Err(DecodeError::InvalidConfig(format!(
                    "channels must be 1..={MAX_CHANNELS}, got {ch}"
                )));
            }
        }
        if self.max_pending_bytes == 0 {
            return Err(DecodeError::InvalidConfig("max_pending_bytes must be non-zero".into()));
        }
        Ok(())
    }
}
