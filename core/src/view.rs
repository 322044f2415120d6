//! view.rs
//! Borrowed, offset-addressable view over a byte buffer.
//!
//! Every accessor is bounds-checked and returns `None` when the requested
//! bytes are not (yet) present. Readers treat `None` as "wait for more data".

use byteorder::{ByteOrder, LittleEndian};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteView<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteView<'a> {
    #[inline]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &'a [u8] {
        self.bytes
    }

    /// Bytes available from `offset` to the end of the view.
    #[inline]
    pub fn remaining_from(&self, offset: usize) -> usize {
        self.bytes.len().saturating_sub(offset)
    }

    #[inline]
    pub fn u8_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(offset).copied()
    }

    /// `len` bytes starting at `offset`, or `None` if they run past the end.
    #[inline]
    pub fn slice(&self, offset: usize, len: usize) -> Option<&'a [u8]> {
        let end = offset.checked_add(len)?;
        self.bytes.get(offset..end)
    }

    #[inline]
    pub fn f32_le_at(&self, offset: usize) -> Option<f32> {
        self.slice(offset, 4).map(LittleEndian::read_f32)
    }

    #[inline]
    pub fn f64_le_at(&self, offset: usize) -> Option<f64> {
        self.slice(offset, 8).map(LittleEndian::read_f64)
    }
}

impl<'a> From<&'a [u8]> for ByteView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}
