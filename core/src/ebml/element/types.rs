use std::fmt;
use num_enum::{FromPrimitive, IntoPrimitive};

use crate::constants::element_ids;
use crate::ebml::vint::ElementSize;

/// Element ID with its marker bits kept. Displays as hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}

/// Every element the decoder knows by ID. Anything else is `Unknown`.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive)]
pub enum ElementType {
    EbmlHeader        = element_ids::EBML_HEADER,
    Segment           = element_ids::SEGMENT,
    SeekHead          = element_ids::SEEK_HEAD,
    Info              = element_ids::INFO,
    Tracks            = element_ids::TRACKS,
    TrackEntry        = element_ids::TRACK_ENTRY,
    TrackNumber       = element_ids::TRACK_NUMBER,
    Audio             = element_ids::AUDIO,
    SamplingFrequency = element_ids::SAMPLING_FREQUENCY,
    Channels          = element_ids::CHANNELS,
    BitDepth          = element_ids::BIT_DEPTH,
    Cluster           = element_ids::CLUSTER,
    Timecode          = element_ids::TIMECODE,
    BlockGroup        = element_ids::BLOCK_GROUP,
    SimpleBlock       = element_ids::SIMPLE_BLOCK,
    Block             = element_ids::BLOCK,
    Cues              = element_ids::CUES,
    Tags              = element_ids::TAGS,
    // 0 is never a valid marker-prefixed id
    #[num_enum(default)]
    Unknown           = 0,
}

/// How the decoder treats an element's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Children follow the header; the decoder recurses.
    Container,
    /// Payload carries interleaved PCM samples.
    Audio,
    /// Small leaf the decoder reads for track configuration.
    Metadata,
    /// Payload is skipped unread.
    Opaque,
}

/// Where an element may legally appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    /// Top level of the stream.
    Root,
    Element(ElementType),
    /// Unrecognized elements can appear anywhere.
    Any,
}

impl ElementType {
    pub const fn kind(self) -> ElementKind {
        use ElementType::*;
        match self {
            Segment | Tracks | TrackEntry | Audio | Cluster | BlockGroup => ElementKind::Container,
            SimpleBlock | Block => ElementKind::Audio,
            TrackNumber | SamplingFrequency | Channels | BitDepth => ElementKind::Metadata,
            EbmlHeader | SeekHead | Info | Timecode | Cues | Tags | Unknown => ElementKind::Opaque,
        }
    }

    pub const fn parent(self) -> Parent {
        use ElementType::*;
        match self {
            EbmlHeader | Segment => Parent::Root,
            SeekHead | Info | Tracks | Cluster | Cues | Tags => Parent::Element(Segment),
            TrackEntry => Parent::Element(Tracks),
            TrackNumber | Audio => Parent::Element(TrackEntry),
            SamplingFrequency | Channels | BitDepth => Parent::Element(Audio),
            Timecode | BlockGroup | SimpleBlock => Parent::Element(Cluster),
            Block => Parent::Element(BlockGroup),
            Unknown => Parent::Any,
        }
    }

    #[inline]
    pub const fn is_container(self) -> bool {
        matches!(self.kind(), ElementKind::Container)
    }

    /// Human-readable name for logs.
    pub const fn name(self) -> &'static str {
        use ElementType::*;
        match self {
            EbmlHeader        => "EBML",
            Segment           => "Segment",
            SeekHead          => "SeekHead",
            Info              => "Info",
            Tracks            => "Tracks",
            TrackEntry        => "TrackEntry",
            TrackNumber       => "TrackNumber",
            Audio             => "Audio",
            SamplingFrequency => "SamplingFrequency",
            Channels          => "Channels",
            BitDepth          => "BitDepth",
            Cluster           => "Cluster",
            Timecode          => "Timecode",
            BlockGroup        => "BlockGroup",
            SimpleBlock       => "SimpleBlock",
            Block             => "Block",
            Cues              => "Cues",
            Tags              => "Tags",
            Unknown           => "unknown",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully read element header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementHeader {
    pub id: ElementId,
    pub element_type: ElementType,
    pub size: ElementSize,
    /// ID bytes + size bytes.
    pub header_len: usize,
}
