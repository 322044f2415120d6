//! Element classification.
//!
//! Responsibilities:
//! - Map element IDs to a closed set of element types (static table)
//! - Decide container / audio / metadata / opaque handling per type
//! - Read complete element headers (ID + size)
//!
//! Non-responsibilities:
//! - Payload decoding
//! - Nesting bookkeeping across chunks

pub mod types;
pub mod classify;
pub mod encode;

pub use types::{
    ElementHeader,
    ElementId,
    ElementKind,
    ElementType,
    Parent,
};
pub use classify::{
    classify,
    read_element_header,
};
pub use encode::{
    encode_block_payload,
    encode_element,
    encode_unknown_size_element,
};
