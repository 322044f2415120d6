use crate::constants::MAX_VINT_LEN;

/// A decoded variable-size integer.
///
/// `length` is always in `1..=8` and is fully determined by the first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarInt {
    /// Big-endian value with the marker bit stripped.
    pub value: u64,
    /// Bytes consumed, marker byte included.
    pub length: usize,
}

impl VarInt {
    /// Largest value representable in `length` bytes (all data bits set).
    #[inline]
    pub const fn max_value(length: usize) -> u64 {
        debug_assert!(length >= 1 && length <= MAX_VINT_LEN);
        (1u64 << (7 * length)) - 1
    }

    /// All data bits set. On a size field this is the "unknown size" sentinel.
    #[inline]
    pub const fn is_all_ones(&self) -> bool {
        self.value == Self::max_value(self.length)
    }
}

/// Data size of an element as declared by its size field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementSize {
    Known(u64),
    /// Reserved sentinel: the element extends until its parent or the stream ends.
    Unknown,
}

impl ElementSize {
    #[inline]
    pub const fn known(self) -> Option<u64> {
        match self {
            ElementSize::Known(n) => Some(n),
            ElementSize::Unknown => None,
        }
    }

    #[inline]
    pub const fn is_unknown(self) -> bool {
        matches!(self, ElementSize::Unknown)
    }
}

/// A decoded size field together with its encoded length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeField {
    pub size: ElementSize,
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VintError {
    /// First byte is zero: the marker would sit past the eighth byte.
    #[error("invalid vint marker at offset {offset}: first byte is 0x00")]
    InvalidMarker { offset: usize },

    #[error("value {value} does not fit a {length}-byte vint")]
    ValueTooLarge { value: u64, length: usize },

    #[error("invalid vint length {length} (expected 1..=8)")]
    InvalidLength { length: usize },

    /// Element IDs must carry their own marker bit.
    #[error("element id 0x{id:X} is not a valid marker-prefixed id")]
    InvalidElementId { id: u64 },
}
