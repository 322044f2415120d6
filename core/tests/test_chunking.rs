// Chunking invariance: the decoded output never depends on where the
// stream was split.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use webm_pcm_core::constants::element_ids as ids;
    use webm_pcm_core::decoder::{ChunkDecoder, DecoderConfig};
    use webm_pcm_core::ebml::content::ChannelPair;
    use webm_pcm_core::ebml::element::{encode_block_payload, encode_element, encode_unknown_size_element};

    fn el(id: u32, payload: &[u8]) -> Vec<u8> {
        encode_element(u64::from(id), payload).unwrap()
    }

    fn stream_of(blocks: &[Vec<f32>]) -> Vec<u8> {
        let mut cluster = el(ids::TIMECODE, &[0]);
        for (i, samples) in blocks.iter().enumerate() {
            let payload = encode_block_payload(1, i as i16, 0x80, samples).unwrap();
            cluster.extend(el(ids::SIMPLE_BLOCK, &payload));
            cluster.extend(el(0xEC, &[0xA3, 0x81, 0x00])); // Void with header-like bytes
        }

        let tracks = el(
            ids::TRACKS,
            &el(ids::TRACK_ENTRY, &[el(ids::TRACK_NUMBER, &[1]), el(ids::AUDIO, &el(ids::CHANNELS, &[2]))].concat()),
        );

        [
            el(ids::EBML_HEADER, &el(0x4282, b"webm")),
            encode_unknown_size_element(u64::from(ids::SEGMENT)).unwrap(),
            tracks,
            el(ids::CLUSTER, &cluster),
            encode_unknown_size_element(u64::from(ids::CLUSTER)).unwrap(),
            el(ids::SIMPLE_BLOCK, &encode_block_payload(1, 0, 0x80, &[0.75, -0.75]).unwrap()),
        ]
        .concat()
    }

    fn decode_chunks<'a>(chunks: impl IntoIterator<Item = &'a [u8]>) -> Vec<ChannelPair> {
        let mut dec = ChunkDecoder::new(DecoderConfig::default()).unwrap();
        let mut out = Vec::new();
        for chunk in chunks {
            dec.decode_into(chunk, &mut out).unwrap();
        }
        let snap = dec.finish().unwrap();
        assert!(snap.sanity_check());
        out
    }

    fn sample_blocks() -> Vec<Vec<f32>> {
        vec![
            vec![0.1, -0.1, 0.2, -0.2, 0.3, -0.3, 0.4, -0.4],
            vec![],
            vec![0.5, -0.5],
        ]
    }

// # ✅ 1. Every single split point

    #[test]
    fn every_two_way_split_matches_whole() {
        let stream = stream_of(&sample_blocks());
        let whole = decode_chunks([stream.as_slice()]);
        assert_eq!(whole.len(), 4);

        for cut in 0..=stream.len() {
            let (a, b) = stream.split_at(cut);
            assert_eq!(decode_chunks([a, b]), whole, "split at {cut}");
        }
    }

// # ✅ 2. Fixed-size chunks

    #[test]
    fn fixed_chunk_sizes_match_whole() {
        let stream = stream_of(&sample_blocks());
        let whole = decode_chunks([stream.as_slice()]);

        for size in 1..=17 {
            assert_eq!(decode_chunks(stream.chunks(size)), whole, "chunk size {size}");
        }
    }

    fn blocks_strategy() -> impl Strategy<Value = Vec<Vec<f32>>> {
        prop::collection::vec(
            prop::collection::vec(-1.0f32..1.0, 0..6).prop_map(|mut v| {
                v.truncate(v.len() & !1);
                v
            }),
            1..5,
        )
    }

    // Property: arbitrary streams split at arbitrary points decode identically
    proptest! {
        #[test]
        fn prop_chunking_invariance(
            blocks in blocks_strategy(),
            cuts in prop::collection::vec(any::<prop::sample::Index>(), 0..8),
        ) {
            let stream = stream_of(&blocks);
            let whole = decode_chunks([stream.as_slice()]);
            prop_assert_eq!(whole.len(), blocks.len() + 1);

            let mut points: Vec<usize> = cuts.iter().map(|i| i.index(stream.len() + 1)).collect();
            points.sort_unstable();
            points.dedup();

            let mut chunks = Vec::new();
            let mut start = 0;
            for p in points {
                chunks.push(&stream[start..p]);
                start = p;
            }
            chunks.push(&stream[start..]);

            prop_assert_eq!(decode_chunks(chunks), whole);
        }
    }
}
