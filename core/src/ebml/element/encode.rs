use crate::ebml::vint::{encode_element_id, encode_unknown_size, encode_vint, VintError};

/// Encode a complete element: `[ id ][ size vint ][ payload ]`.
pub fn encode_element(id: u64, payload: &[u8]) -> Result<Vec<u8>, VintError> {
    let id_bytes = encode_element_id(id)?;
    let size_bytes = encode_vint(payload.len() as u64, None)?;

    let mut out = Vec::with_capacity(id_bytes.len() + size_bytes.len() + payload.len());
    out.extend_from_slice(&id_bytes);
    out.extend_from_slice(&size_bytes);
    out.extend_from_slice(payload);
    Ok(out)
}

/// Encode only the header of an element whose size is unknown (live streams).
///
/// Children are appended by the caller.
pub fn encode_unknown_size_element(id: u64) -> Result<Vec<u8>, VintError> {
    let mut out = encode_element_id(id)?;
    out.extend_from_slice(&encode_unknown_size(8)?);
    Ok(out)
}

/// Encode a Matroska block payload carrying little-endian f32 samples.
///
/// Layout:
///
/// ```text
/// [ track number (vint) ]
/// [ timecode     (i16 BE) ]
/// [ flags        (1) ]
/// [ samples      (4 * N, f32 LE) ]
/// ```
pub fn encode_block_payload(
    track_number: u64,
    timecode: i16,
    flags: u8,
    samples: &[f32],
) -> Result<Vec<u8>, VintError> {
    let mut out = encode_vint(track_number, None)?;
    out.reserve(3 + samples.len() * 4);

    out.extend_from_slice(&timecode.to_be_bytes());
    out.push(flags);
    for &s in samples {
        out.extend_from_slice(&s.to_le_bytes());
    }
    Ok(out)
}
