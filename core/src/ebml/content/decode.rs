use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::constants::BLOCK_HEADER_FIXED_LEN;
use crate::ebml::content::types::{
    BlockFraming, BlockHeader, ChannelPair, ContentError, ContentLayout, ElementContent,
    SampleFormat,
};
use crate::ebml::element::{ElementKind, ElementType};
use crate::ebml::vint::read_vint;
use crate::view::ByteView;

/// Read the payload of an element whose header ends at `offset`.
///
/// - containers: `{ content: None, length: 0 }`, children are parsed by the caller
/// - metadata / opaque leaves: `{ content: None, length: size }`
/// - audio blocks: `Ok(None)` until all `size` bytes are in `view`, then the
///   decoded channel pair (or a skip if the block belongs to another track)
pub fn read_element_content(
    view: ByteView<'_>,
    offset: usize,
    element_type: ElementType,
    size: u64,
    layout: &ContentLayout,
) -> Result<Option<ElementContent>, ContentError> {
    match element_type.kind() {
        ElementKind::Container => Ok(Some(ElementContent::skip(0))),
        ElementKind::Metadata | ElementKind::Opaque => Ok(Some(ElementContent::skip(size))),
        ElementKind::Audio => {
            let Ok(len) = usize::try_from(size) else {
                return Ok(None);
            };
            let Some(payload) = view.slice(offset, len) else {
                return Ok(None);
            };

            let samples = match layout.framing {
                BlockFraming::Raw => payload,
                BlockFraming::Matroska => {
                    let header = parse_block_header(payload)?;
                    // other tracks are skipped whatever their layout
                    if layout.track.is_some_and(|t| t != header.track_number) {
                        return Ok(Some(ElementContent::skip(size)));
                    }
                    header.ensure_unlaced()?;
                    &payload[header.header_len..]
                }
            };

            let pair = deinterleave(samples, layout)?;
            Ok(Some(ElementContent { content: Some(pair), length: size }))
        }
    }
}

/// Parse the Matroska block header at the start of a block payload.
///
/// Lacing is reported through the flags, not rejected here; see
/// [`BlockHeader::ensure_unlaced`].
pub fn parse_block_header(payload: &[u8]) -> Result<BlockHeader, ContentError> {
    let view = ByteView::new(payload);
    let track = read_vint(view, 0)?.ok_or(ContentError::ShortBlock { len: payload.len() })?;

    let fixed = view
        .slice(track.length, BLOCK_HEADER_FIXED_LEN)
        .ok_or(ContentError::ShortBlock { len: payload.len() })?;

    let timecode = BigEndian::read_i16(&fixed[0..2]);
    let flags = fixed[2];

    Ok(BlockHeader {
        track_number: track.value,
        timecode,
        flags,
        header_len: track.length + BLOCK_HEADER_FIXED_LEN,
    })
}

/// Split interleaved samples into two channels.
///
/// Even sample indices go to the left channel and odd ones to the right;
/// mono input is duplicated into both.
pub fn deinterleave(samples: &[u8], layout: &ContentLayout) -> Result<ChannelPair, ContentError> {
    layout.validate()?;

    let frame_size = layout.frame_size();
    if samples.len() % frame_size != 0 {
        return Err(ContentError::PartialFrame { bytes: samples.len(), frame_size });
    }

    let width = layout.format.bytes_per_sample();
    let read = |b: &[u8]| match layout.format {
        SampleFormat::F32Le => LittleEndian::read_f32(b),
        SampleFormat::F64Le => LittleEndian::read_f64(b) as f32,
    };

    let frames = samples.len() / frame_size;
    if layout.channels == 1 {
        let mono: Vec<f32> = samples.chunks_exact(width).map(read).collect();
        return Ok(ChannelPair::from_mono(mono));
    }

    let mut left = Vec::with_capacity(frames);
    let mut right = Vec::with_capacity(frames);
    for frame in samples.chunks_exact(frame_size) {
        left.push(read(&frame[..width]));
        right.push(read(&frame[width..]));
    }

    ChannelPair::new(left, right).ok_or(ContentError::PartialFrame { bytes: samples.len(), frame_size })
}

/// Big-endian unsigned integer leaf (0 to 8 bytes).
pub fn read_uint(payload: &[u8], element: ElementType) -> Result<u64, ContentError> {
    match payload.len() {
        0 => Ok(0),
        n @ 1..=8 => Ok(BigEndian::read_uint(payload, n)),
        n => Err(ContentError::InvalidLeaf {
            element: element.name(),
            len: n as u64,
            expected: "unsigned integer",
        }),
    }
}

/// Big-endian float leaf (0, 4 or 8 bytes).
pub fn read_float(payload: &[u8], element: ElementType) -> Result<f64, ContentError> {
    match payload.len() {
        0 => Ok(0.0),
        4 => Ok(f64::from(BigEndian::read_f32(payload))),
        8 => Ok(BigEndian::read_f64(payload)),
        n => Err(ContentError::InvalidLeaf {
            element: element.name(),
            len: n as u64,
            expected: "float",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ebml::element::encode_block_payload;

    fn stereo_raw() -> ContentLayout {
        ContentLayout { framing: BlockFraming::Raw, ..ContentLayout::default() }
    }

    fn le_bytes(samples: &[f32]) -> Vec<u8> {
        samples.iter().flat_map(|s| s.to_le_bytes()).collect()
    }

    #[test]
    fn container_has_no_content_length() {
        let view = ByteView::new(&[]);
        let c = read_element_content(view, 0, ElementType::Cluster, 100, &stereo_raw())
            .unwrap()
            .unwrap();
        assert_eq!(c, ElementContent::skip(0));
    }

    #[test]
    fn opaque_leaf_skips_declared_length_without_data() {
        let view = ByteView::new(&[]);
        let c = read_element_content(view, 0, ElementType::Cues, 5_000_000_000, &stereo_raw())
            .unwrap()
            .unwrap();
        assert_eq!(c, ElementContent::skip(5_000_000_000));
    }

    #[test]
    fn audio_waits_for_full_payload() {
        let bytes = le_bytes(&[0.1, -0.1]);
        let view = ByteView::new(&bytes[..7]);
        let c = read_element_content(view, 0, ElementType::SimpleBlock, 8, &stereo_raw()).unwrap();
        assert_eq!(c, None);
    }

    #[test]
    fn stereo_split_even_odd() {
        let bytes = le_bytes(&[0.1, -0.1, 0.2, -0.2]);
        let view = ByteView::new(&bytes);
        let c = read_element_content(view, 0, ElementType::SimpleBlock, 16, &stereo_raw())
            .unwrap()
            .unwrap();

        let pair = c.content.unwrap();
        assert_eq!(c.length, 16);
        assert_eq!(pair.left(), &[0.1, 0.2]);
        assert_eq!(pair.right(), &[-0.1, -0.2]);
    }

    #[test]
    fn mono_duplicates_channel() {
        let layout = ContentLayout { channels: 1, ..stereo_raw() };
        let pair = deinterleave(&le_bytes(&[0.5, 0.25, -1.0]), &layout).unwrap();
        assert_eq!(pair.left(), pair.right());
        assert_eq!(pair.frames(), 3);
    }

    #[test]
    fn f64_samples_are_narrowed() {
        let layout = ContentLayout { format: SampleFormat::F64Le, ..stereo_raw() };
        let bytes: Vec<u8> = [0.5f64, -0.5].iter().flat_map(|s| s.to_le_bytes()).collect();
        let pair = deinterleave(&bytes, &layout).unwrap();
        assert_eq!(pair.left(), &[0.5]);
        assert_eq!(pair.right(), &[-0.5]);
    }

    #[test]
    fn partial_frame_is_rejected() {
        let err = deinterleave(&le_bytes(&[0.1, 0.2, 0.3]), &stereo_raw()).unwrap_err();
        assert_eq!(err, ContentError::PartialFrame { bytes: 12, frame_size: 8 });
    }

    #[test]
    fn matroska_block_header_is_stripped() {
        let payload = encode_block_payload(1, 0, 0x80, &[0.1, -0.1]).unwrap();
        let view = ByteView::new(&payload);
        let c = read_element_content(
            view,
            0,
            ElementType::SimpleBlock,
            payload.len() as u64,
            &ContentLayout::default(),
        )
        .unwrap()
        .unwrap();

        let pair = c.content.unwrap();
        assert_eq!(pair.left(), &[0.1]);
        assert_eq!(pair.right(), &[-0.1]);
    }

    #[test]
    fn other_track_is_skipped() {
        let payload = encode_block_payload(2, 0, 0x80, &[0.1, -0.1]).unwrap();
        let layout = ContentLayout { track: Some(1), ..ContentLayout::default() };
        let c = read_element_content(
            ByteView::new(&payload),
            0,
            ElementType::SimpleBlock,
            payload.len() as u64,
            &layout,
        )
        .unwrap()
        .unwrap();

        assert_eq!(c, ElementContent::skip(payload.len() as u64));
    }

    #[test]
    fn laced_block_is_rejected_on_the_selected_track() {
        let payload = encode_block_payload(1, 0, 0x02, &[0.0, 0.0]).unwrap();
        let header = parse_block_header(&payload).unwrap();
        assert!(header.is_laced());
        assert_eq!(header.ensure_unlaced(), Err(ContentError::Laced { flags: 0x02 }));

        let err = read_element_content(
            ByteView::new(&payload),
            0,
            ElementType::SimpleBlock,
            payload.len() as u64,
            &ContentLayout { track: Some(1), ..ContentLayout::default() },
        )
        .unwrap_err();
        assert_eq!(err, ContentError::Laced { flags: 0x02 });
    }

    #[test]
    fn laced_block_on_other_track_is_skipped() {
        let payload = encode_block_payload(2, 0, 0x82, &[0.0, 0.0, 0.0]).unwrap();
        let len = payload.len() as u64;
        let c = read_element_content(
            ByteView::new(&payload),
            0,
            ElementType::SimpleBlock,
            len,
            &ContentLayout { track: Some(1), ..ContentLayout::default() },
        )
        .unwrap()
        .unwrap();
        assert_eq!(c, ElementContent::skip(len));
    }

    #[test]
    fn short_block_is_rejected() {
        assert_eq!(parse_block_header(&[0x81, 0x00]), Err(ContentError::ShortBlock { len: 2 }));
    }

    #[test]
    fn leaf_readers() {
        assert_eq!(read_uint(&[0x01, 0x00], ElementType::BitDepth).unwrap(), 256);
        assert_eq!(read_uint(&[], ElementType::Channels).unwrap(), 0);
        assert!(read_uint(&[0; 9], ElementType::Channels).is_err());
        assert_eq!(read_float(&48000f32.to_be_bytes(), ElementType::SamplingFrequency).unwrap(), 48000.0);
        assert!(read_float(&[0; 3], ElementType::SamplingFrequency).is_err());
    }
}
