//! Variable-size integers (VINTs).
//!
//! Responsibilities:
//! - Decode VINTs used for element IDs and element data sizes
//! - Recognize the reserved "unknown size" sentinel
//! - Encode VINTs for building streams
//!
//! Non-responsibilities:
//! - Element classification
//! - Buffering across chunks

pub mod types;
pub mod encode;
pub mod decode;

pub use types::{
    ElementSize,
    SizeField,
    VarInt,
    VintError,
};
pub use decode::{
    read_element_id,
    read_element_size,
    read_vint,
    read_vint_length,
};
pub use encode::{
    encode_element_id,
    encode_unknown_size,
    encode_vint,
};
