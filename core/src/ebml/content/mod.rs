//! Element content reading.
//!
//! Responsibilities:
//! - Tell the decoder how many payload bytes an element occupies
//! - Decode audio block payloads into a deinterleaved channel pair
//! - Read the unsigned/float leaves used for track configuration
//!
//! Content is all-or-nothing: a payload is either decoded completely or
//! reported as not yet available.

pub mod types;
pub mod decode;

pub use types::{
    BlockFraming,
    BlockHeader,
    ChannelPair,
    ContentError,
    ContentLayout,
    ElementContent,
    SampleFormat,
};
pub use decode::{
    deinterleave,
    parse_block_header,
    read_element_content,
    read_float,
    read_uint,
};
