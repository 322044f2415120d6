use crate::ebml::element::types::{ElementHeader, ElementId, ElementType};
use crate::ebml::vint::{read_element_id, read_element_size, VintError};
use crate::view::ByteView;

/// Map an element ID to its type. Total: unrecognized IDs are `Unknown`.
#[inline]
pub fn classify(id: u64) -> ElementType {
    u32::try_from(id).map_or(ElementType::Unknown, ElementType::from)
}

/// Read the ID and size of the element starting at `offset`.
///
/// `Ok(None)` if either field is not fully present yet.
pub fn read_element_header(
    view: ByteView<'_>,
    offset: usize,
) -> Result<Option<ElementHeader>, VintError> {
    let Some(id) = read_element_id(view, offset)? else {
        return Ok(None);
    };
    let Some(size) = read_element_size(view, offset + id.length)? else {
        return Ok(None);
    };

    Ok(Some(ElementHeader {
        id: ElementId(id.value),
        element_type: classify(id.value),
        size: size.size,
        header_len: id.length + size.length,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ebml::element::types::{ElementKind, Parent};
    use crate::ebml::vint::ElementSize;

    #[test]
    fn known_ids() {
        assert_eq!(classify(0x1853_8067), ElementType::Segment);
        assert_eq!(classify(0x1F43_B675), ElementType::Cluster);
        assert_eq!(classify(0xA3), ElementType::SimpleBlock);
        assert_eq!(classify(0xA3).kind(), ElementKind::Audio);
        assert_eq!(classify(0xA0).kind(), ElementKind::Container);
    }

    #[test]
    fn unrecognized_ids_are_unknown() {
        assert_eq!(classify(0), ElementType::Unknown);
        assert_eq!(classify(0xEC), ElementType::Unknown);
        assert_eq!(classify(u64::MAX), ElementType::Unknown);
        assert_eq!(classify(0xEC).parent(), Parent::Any);
    }

    #[test]
    fn header_needs_both_fields() {
        let data = [0xA3u8, 0x84, 0, 0, 0, 0];
        let view = ByteView::new(&data);

        let header = read_element_header(view, 0).unwrap().unwrap();
        assert_eq!(header.element_type, ElementType::SimpleBlock);
        assert_eq!(header.size, ElementSize::Known(4));
        assert_eq!(header.header_len, 2);

        assert_eq!(read_element_header(ByteView::new(&data[..1]), 0).unwrap(), None);
    }
}
