//! constants.rs
//! Element IDs, wire sentinels and decoder defaults.
//!
//! Element IDs are written in the conventional Matroska notation, i.e. with the
//! VINT marker bits kept. `ebml::element::ElementType` is built from this table.

/// Longest VINT the format allows (one marker bit per byte of the first octet).
pub const MAX_VINT_LEN: usize = 8;

/// Element IDs recognized by the classifier.
pub mod element_ids {
    pub const EBML_HEADER: u32        = 0x1A45_DFA3;
    pub const SEGMENT: u32            = 0x1853_8067;
    pub const SEEK_HEAD: u32          = 0x114D_9B74;
    pub const INFO: u32               = 0x1549_A966;
    pub const TRACKS: u32             = 0x1654_AE6B;
    pub const TRACK_ENTRY: u32        = 0xAE;
    pub const TRACK_NUMBER: u32       = 0xD7;
    pub const AUDIO: u32              = 0xE1;
    pub const SAMPLING_FREQUENCY: u32 = 0xB5;
    pub const CHANNELS: u32           = 0x9F;
    pub const BIT_DEPTH: u32          = 0x6264;
    pub const CLUSTER: u32            = 0x1F43_B675;
    pub const TIMECODE: u32           = 0xE7;
    pub const BLOCK_GROUP: u32        = 0xA0;
    pub const SIMPLE_BLOCK: u32       = 0xA3;
    pub const BLOCK: u32              = 0xA1;
    pub const CUES: u32               = 0x1C53_BB6B;
    pub const TAGS: u32               = 0x1254_C367;
}

/// Matroska block header: the flag bits that announce lacing.
pub const BLOCK_LACING_MASK: u8 = 0b0000_0110;
/// Block header bytes after the track number VINT (timecode i16 + flags u8).
pub const BLOCK_HEADER_FIXED_LEN: usize = 3;

/// Channel count used when neither the config nor the stream declares one.
pub const DEFAULT_CHANNELS: u8 = 2;
/// `Channels` value assumed when an `Audio` element leaves it out.
pub const TRACK_DEFAULT_CHANNELS: u8 = 1;
/// Highest channel count the decoder can split into a pair.
pub const MAX_CHANNELS: u8 = 2;

/// Upper bound on bytes the decoder buffers while waiting for an element to complete.
/// Opaque elements are discarded as they arrive and never count against it.
pub const DEFAULT_MAX_PENDING_BYTES: usize = 16 * 1024 * 1024; // 16 MiB
