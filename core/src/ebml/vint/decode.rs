use crate::ebml::vint::types::{ElementSize, SizeField, VarInt, VintError};
use crate::view::ByteView;

/// Encoded length of the VINT starting at `offset`, from its first byte only.
///
/// Returns `Ok(None)` when `offset` is past the end of the view.
#[inline]
pub fn read_vint_length(view: ByteView<'_>, offset: usize) -> Result<Option<usize>, VintError> {
    let Some(first) = view.u8_at(offset) else {
        return Ok(None);
    };
    if first == 0 {
        return Err(VintError::InvalidMarker { offset });
    }
    Ok(Some(first.leading_zeros() as usize + 1))
}

/// Decode one VINT at `offset`.
///
/// `Ok(None)` means the view ends before the declared length: feed more bytes
/// and retry at the same offset.
pub fn read_vint(view: ByteView<'_>, offset: usize) -> Result<Option<VarInt>, VintError> {
    let Some(length) = read_vint_length(view, offset)? else {
        return Ok(None);
    };
    let Some(bytes) = view.slice(offset, length) else {
        return Ok(None);
    };

    // strip the marker from the first byte
    let mut value = u64::from(bytes[0] & (0xFFu8 >> length));
    for &b in &bytes[1..] {
        value = (value << 8) | u64::from(b);
    }

    Ok(Some(VarInt { value, length }))
}

/// Decode an element ID. IDs keep their marker bits, so `0xA3` stays `0xA3`.
pub fn read_element_id(view: ByteView<'_>, offset: usize) -> Result<Option<VarInt>, VintError> {
    let Some(length) = read_vint_length(view, offset)? else {
        return Ok(None);
    };
    let Some(bytes) = view.slice(offset, length) else {
        return Ok(None);
    };

    let value = bytes.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
    Ok(Some(VarInt { value, length }))
}

/// Decode an element data-size field, surfacing the unknown-size sentinel.
pub fn read_element_size(view: ByteView<'_>, offset: usize) -> Result<Option<SizeField>, VintError> {
    let Some(vint) = read_vint(view, offset)? else {
        return Ok(None);
    };

    let size = if vint.is_all_ones() {
        ElementSize::Unknown
    } else {
        ElementSize::Known(vint.value)
    };

    Ok(Some(SizeField { size, length: vint.length }))
}
