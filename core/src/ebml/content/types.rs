use crate::constants::{BLOCK_LACING_MASK, DEFAULT_CHANNELS, MAX_CHANNELS};
use crate::ebml::vint::VintError;

/// Two equal-length channels of f32 samples, roughly in `[-1.0, 1.0]`.
///
/// Mono sources carry the same samples in both channels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelPair {
    left: Vec<f32>,
    right: Vec<f32>,
}

impl ChannelPair {
    /// `None` if the channels differ in length.
    pub fn new(left: Vec<f32>, right: Vec<f32>) -> Option<Self> {
        (left.len() == right.len()).then_some(Self { left, right })
    }

    pub fn from_mono(samples: Vec<f32>) -> Self {
        Self { right: samples.clone(), left: samples }
    }

    #[inline]
    pub fn left(&self) -> &[f32] {
        &self.left
    }

    #[inline]
    pub fn right(&self) -> &[f32] {
        &self.right
    }

    /// Samples per channel.
    #[inline]
    pub fn frames(&self) -> usize {
        self.left.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    pub fn into_channels(self) -> (Vec<f32>, Vec<f32>) {
        (self.left, self.right)
    }
}

/// Result of reading one element's payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementContent {
    /// Decoded samples for audio blocks, `None` for everything else.
    pub content: Option<ChannelPair>,
    /// Payload bytes to advance past (0 for containers).
    pub length: u64,
}

impl ElementContent {
    #[inline]
    pub const fn skip(length: u64) -> Self {
        Self { content: None, length }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleFormat {
    /// IEEE float, 32-bit little-endian (`A_PCM/FLOAT/IEEE`, BitDepth 32).
    #[default]
    F32Le,
    /// IEEE float, 64-bit little-endian (BitDepth 64), narrowed to f32.
    F64Le,
}

impl SampleFormat {
    #[inline]
    pub const fn bytes_per_sample(self) -> usize {
        match self {
            SampleFormat::F32Le => 4,
            SampleFormat::F64Le => 8,
        }
    }

    /// Format for a Matroska `BitDepth` value.
    pub const fn from_bit_depth(bits: u64) -> Option<Self> {
        match bits {
            32 => Some(SampleFormat::F32Le),
            64 => Some(SampleFormat::F64Le),
            _ => None,
        }
    }
}

/// Where samples start inside an audio block payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockFraming {
    /// Track number vint, i16 timecode and a flag byte precede the samples.
    #[default]
    Matroska,
    /// The whole payload is samples.
    Raw,
}

/// Everything the content reader needs to turn a payload into samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLayout {
    /// 1 (mono) or 2 (interleaved stereo).
    pub channels: u8,
    pub format: SampleFormat,
    pub framing: BlockFraming,
    /// Only blocks of this track are decoded; others are skipped.
    pub track: Option<u64>,
}

impl Default for ContentLayout {
    fn default() -> Self {
        Self {
            channels: DEFAULT_CHANNELS,
            format: SampleFormat::default(),
            framing: BlockFraming::default(),
            track: None,
        }
    }
}

impl ContentLayout {
    /// Bytes per interleaved frame (one sample per channel).
    #[inline]
    pub const fn frame_size(&self) -> usize {
        self.format.bytes_per_sample() * self.channels as usize
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.channels == 0 || self.channels > MAX_CHANNELS {
            return Err(ContentError::UnsupportedChannels { channels: u64::from(self.channels) });
        }
        Ok(())
    }
}

/// Matroska block header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    pub track_number: u64,
    /// Relative to the cluster timecode.
    pub timecode: i16,
    pub flags: u8,
    /// Bytes before the first sample.
    pub header_len: usize,
}

impl BlockHeader {
    #[inline]
    pub const fn is_laced(&self) -> bool {
        self.flags & BLOCK_LACING_MASK != 0
    }

    /// Laced payloads hold several frames behind size tables; only plain
    /// payloads can be deinterleaved.
    pub fn ensure_unlaced(&self) -> Result<(), ContentError> {
        if self.is_laced() {
            return Err(ContentError::Laced { flags: self.flags });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("block track number: {0}")]
    Vint(#[from] VintError),

    #[error("block payload too short for its header: {len} bytes")]
    ShortBlock { len: usize },

    #[error("laced blocks are not supported (flags 0x{flags:02X})")]
    Laced { flags: u8 },

    #[error("sample data of {bytes} bytes is not a whole number of {frame_size}-byte frames")]
    PartialFrame { bytes: usize, frame_size: usize },

    #[error("unsupported channel count: {channels}")]
    UnsupportedChannels { channels: u64 },

    #[error("{element} payload of {len} bytes is not a valid {expected}")]
    InvalidLeaf { element: &'static str, len: u64, expected: &'static str },
}
