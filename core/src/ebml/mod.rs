//! ebml — the wire layer.
//!
//! `vint` reads variable-size integers, `element` classifies element headers,
//! `content` turns element payloads into channel pairs or skip lengths.
//! Everything here is stateless and works on a borrowed `ByteView`.

pub mod vint;
pub mod element;
pub mod content;
