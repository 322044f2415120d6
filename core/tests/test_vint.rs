// VINT reader and writer:
// * `read_vint` / `read_vint_length`
// * `read_element_id` / `read_element_size`
// * `encode_vint` / `encode_unknown_size` / `encode_element_id`

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use webm_pcm_core::ebml::vint::{
        encode_element_id, encode_unknown_size, encode_vint, read_element_id, read_element_size,
        read_vint, read_vint_length, ElementSize, VarInt, VintError,
    };
    use webm_pcm_core::view::ByteView;

// # ✅ 1. Length is announced by the first byte

    #[test]
    fn length_from_marker_bit() {
        let cases: [(u8, usize); 8] = [
            (0x80, 1),
            (0x40, 2),
            (0x20, 3),
            (0x10, 4),
            (0x08, 5),
            (0x04, 6),
            (0x02, 7),
            (0x01, 8),
        ];
        for (first, expected) in cases {
            let data = [first];
            assert_eq!(read_vint_length(ByteView::new(&data), 0).unwrap(), Some(expected));
        }
    }

// # ✅ 2. Known multi-byte values

    #[test]
    fn decodes_known_values() {
        let data = [0x40, 0x02, 0x1A, 0x45, 0xDF, 0xA3];
        let view = ByteView::new(&data);

        assert_eq!(read_vint(view, 0).unwrap(), Some(VarInt { value: 2, length: 2 }));
        let id = read_element_id(view, 2).unwrap().unwrap();
        assert_eq!(id, VarInt { value: 0x1A45_DFA3, length: 4 });
    }

// # ⏸ 3. Missing continuation bytes mean "wait", not "error"

    #[test]
    fn short_input_is_insufficient_data() {
        let data = [0x20, 0x01];
        let view = ByteView::new(&data);

        assert_eq!(read_vint_length(view, 0).unwrap(), Some(3));
        assert_eq!(read_vint(view, 0).unwrap(), None);
        assert_eq!(read_vint(view, 2).unwrap(), None);
        assert_eq!(read_element_size(view, 0).unwrap(), None);
    }

// # ✅ 4. Unknown-size sentinel in every width

    #[test]
    fn unknown_size_is_distinct() {
        for len in 1..=8 {
            let wire = encode_unknown_size(len).unwrap();
            let size = read_element_size(ByteView::new(&wire), 0).unwrap().unwrap();
            assert_eq!(size.size, ElementSize::Unknown);
            assert_eq!(size.length, len);
        }

        // one below the sentinel is a literal size
        let wire = encode_vint(VarInt::max_value(1) - 1, Some(1)).unwrap();
        let size = read_element_size(ByteView::new(&wire), 0).unwrap().unwrap();
        assert_eq!(size.size, ElementSize::Known(126));
    }

// # ❌ 5. Invalid input

    #[test]
    fn invalid_inputs_are_rejected() {
        let data = [0x00];
        assert_eq!(read_vint(ByteView::new(&data), 0), Err(VintError::InvalidMarker { offset: 0 }));

        assert_eq!(encode_vint(127, Some(1)), Err(VintError::ValueTooLarge { value: 127, length: 1 }));
        assert_eq!(encode_vint(1, Some(9)), Err(VintError::InvalidLength { length: 9 }));
        assert_eq!(encode_unknown_size(0), Err(VintError::InvalidLength { length: 0 }));
        assert_eq!(encode_element_id(0x1F), Err(VintError::InvalidElementId { id: 0x1F }));
    }

// # ✅ 6. Element IDs round-trip with their marker

    #[test]
    fn element_id_roundtrip() {
        for id in [0xA3u64, 0x6264, 0x2A_D7B1, 0x1F43_B675] {
            let wire = encode_element_id(id).unwrap();
            let back = read_element_id(ByteView::new(&wire), 0).unwrap().unwrap();
            assert_eq!(back.value, id);
            assert_eq!(back.length, wire.len());
        }
    }

    fn len_and_value() -> impl Strategy<Value = (usize, u64)> {
        (1usize..=8).prop_flat_map(|len| (Just(len), 0..VarInt::max_value(len)))
    }

    // Property: every representable value survives a fixed-width round trip
    proptest! {
        #[test]
        fn prop_vint_roundtrip((len, value) in len_and_value()) {
            let wire = encode_vint(value, Some(len)).unwrap();
            prop_assert_eq!(wire.len(), len);

            let decoded = read_vint(ByteView::new(&wire), 0).unwrap().unwrap();
            prop_assert_eq!(decoded, VarInt { value, length: len });
        }

        #[test]
        fn prop_shortest_form_is_minimal(value in 0u64..VarInt::max_value(8)) {
            let wire = encode_vint(value, None).unwrap();
            let len = wire.len();
            prop_assert!(value < VarInt::max_value(len));
            if len > 1 {
                prop_assert!(value >= VarInt::max_value(len - 1));
            }
        }
    }
}
