use crate::constants::MAX_VINT_LEN;
use crate::ebml::vint::types::{VarInt, VintError};

/// Encode `value` as a VINT.
///
/// With `length == None` the shortest encoding is chosen. The all-ones pattern
/// is reserved for the unknown-size sentinel, so it is never produced here.
pub fn encode_vint(value: u64, length: Option<usize>) -> Result<Vec<u8>, VintError> {
    let length = match length {
        Some(len) => {
            if !(1..=MAX_VINT_LEN).contains(&len) {
                return Err(VintError::InvalidLength { length: len });
            }
            if value >= VarInt::max_value(len) {
                return Err(VintError::ValueTooLarge { value, length: len });
            }
            len
        }
        None => (1..=MAX_VINT_LEN)
            .find(|&len| value < VarInt::max_value(len))
            .ok_or(VintError::ValueTooLarge { value, length: MAX_VINT_LEN })?,
    };

    let marker = 1u64 << (7 * length);
    let encoded = value | marker;
    Ok(encoded.to_be_bytes()[8 - length..].to_vec())
}

/// The unknown-size sentinel in `length` bytes.
pub fn encode_unknown_size(length: usize) -> Result<Vec<u8>, VintError> {
    if !(1..=MAX_VINT_LEN).contains(&length) {
        return Err(VintError::InvalidLength { length });
    }
    let encoded = VarInt::max_value(length) | (1u64 << (7 * length));
    Ok(encoded.to_be_bytes()[8 - length..].to_vec())
}

/// Encode a marker-prefixed element ID (e.g. `0x1F43B675`) as its wire bytes.
pub fn encode_element_id(id: u64) -> Result<Vec<u8>, VintError> {
    if id == 0 {
        return Err(VintError::InvalidElementId { id });
    }
    let length = 8 - (id.leading_zeros() as usize / 8);
    let bytes = &id.to_be_bytes()[8 - length..];

    // the first byte's marker must announce exactly `length` bytes
    if bytes[0].leading_zeros() as usize + 1 != length {
        return Err(VintError::InvalidElementId { id });
    }
    Ok(bytes.to_vec())
}
