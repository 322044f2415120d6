use bytes::{Buf, BytesMut};
use log::{debug, trace};

use crate::constants::{DEFAULT_CHANNELS, MAX_CHANNELS, TRACK_DEFAULT_CHANNELS};
use crate::decoder::config::DecoderConfig;
use crate::decoder::state::{NestingStack, OpenContainer, TrackAudioInfo, TrackEntryState};
use crate::ebml::content::{
    read_element_content, read_float, read_uint, ChannelPair, ContentLayout, SampleFormat,
};
use crate::ebml::element::{read_element_header, ElementKind, ElementType};
use crate::ebml::vint::ElementSize;
use crate::telemetry::{DecoderCounters, DecoderSnapshot};
use crate::types::DecodeError;
use crate::view::ByteView;

/// Incremental decoder for a WebM/EBML byte stream carrying PCM audio.
///
/// Feed chunks in stream order with [`decode`](Self::decode); each call returns
/// every channel pair that became complete. Bytes of an element that has not
/// fully arrived are kept in an owned tail and re-read on the next call, so
/// chunk boundaries may fall anywhere.
///
/// One instance per stream, driven by a single owner.
#[derive(Debug)]
pub struct ChunkDecoder {
    config: DecoderConfig,
    /// Fed but not yet consumed. Starts at absolute offset `consumed`.
    pending: BytesMut,
    consumed: u64,
    /// Body bytes of an opaque element still to be discarded as they arrive.
    skip_remaining: u64,
    nesting: NestingStack,
    track: TrackAudioInfo,
    entry: Option<TrackEntryState>,
    counters: DecoderCounters,
    fault: Option<DecodeError>,
}

impl Default for ChunkDecoder {
    fn default() -> Self {
        Self::with_valid_config(DecoderConfig::default())
    }
}

impl ChunkDecoder {
    pub fn new(config: DecoderConfig) -> Result<Self, DecodeError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: DecoderConfig) -> Self {
        Self {
            config,
            pending: BytesMut::new(),
            consumed: 0,
            skip_remaining: 0,
            nesting: NestingStack::new(),
            track: TrackAudioInfo::default(),
            entry: None,
            counters: DecoderCounters::default(),
            fault: None,
        }
    }

    /// Decode one chunk and return the channel pairs it completed, in stream order.
    pub fn decode(&mut self, chunk: &[u8]) -> Result<Vec<ChannelPair>, DecodeError> {
        let mut out = Vec::new();
        self.decode_into(chunk, &mut out)?;
        Ok(out)
    }

    /// Like [`decode`](Self::decode), appending to `out`.
    ///
    /// Returns the number of pairs appended. On a fault, pairs decoded earlier
    /// in the same call remain in `out`.
    pub fn decode_into(
        &mut self,
        chunk: &[u8],
        out: &mut Vec<ChannelPair>,
    ) -> Result<usize, DecodeError> {
        if let Some(fault) = &self.fault {
            return Err(DecodeError::Halted(Box::new(fault.clone())));
        }
        if chunk.is_empty() {
            return Ok(0);
        }

        self.counters.add_chunk(chunk.len());
        self.pending.extend_from_slice(chunk);

        let before = out.len();
        let mut working = self.pending.split();
        let (advanced, result) = self.walk(&working, out);
        working.advance(advanced);
        self.pending = working;
        self.consumed += advanced as u64;

        if let Err(err) = result.and_then(|()| self.check_pending_limit()) {
            debug!("decoder halted at offset {}: {}", self.consumed, err);
            self.fault = Some(err.clone());
            return Err(err);
        }

        trace!(
            "chunk of {} bytes: {} pairs, {} bytes pending",
            chunk.len(),
            out.len() - before,
            self.pending.len()
        );
        Ok(out.len() - before)
    }

    /// Declare the end of the stream.
    ///
    /// Fails with [`DecodeError::Truncated`] if bytes are still pending, an
    /// opaque element is only partly skipped, or a known-size container never
    /// received all of its bytes.
    pub fn finish(self) -> Result<DecoderSnapshot, DecodeError> {
        if let Some(fault) = &self.fault {
            return Err(DecodeError::Halted(Box::new(fault.clone())));
        }

        let missing_bytes = self.nesting.missing_bytes(self.consumed).max(self.skip_remaining);
        if !self.pending.is_empty() || missing_bytes > 0 {
            return Err(DecodeError::Truncated { pending_bytes: self.pending.len(), missing_bytes });
        }

        debug!(
            "stream finished: {} bytes, {} audio blocks",
            self.consumed, self.counters.audio_blocks
        );
        Ok(self.snapshot())
    }

    /// Drop all stream state, including a latched fault. The config is kept.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.consumed = 0;
        self.skip_remaining = 0;
        self.nesting.clear();
        self.track = TrackAudioInfo::default();
        self.entry = None;
        self.counters = DecoderCounters::default();
        self.fault = None;
    }

    #[inline]
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Bytes held back waiting for the rest of an element.
    #[inline]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn bytes_fed(&self) -> u64 {
        self.counters.bytes_fed
    }

    #[inline]
    pub fn bytes_consumed(&self) -> u64 {
        self.consumed
    }

    /// Open containers.
    #[inline]
    pub fn depth(&self) -> usize {
        self.nesting.depth()
    }

    pub fn open_containers(&self) -> impl Iterator<Item = &OpenContainer> {
        self.nesting.iter()
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.fault.is_some()
    }

    pub fn fault(&self) -> Option<&DecodeError> {
        self.fault.as_ref()
    }

    pub fn track_info(&self) -> &TrackAudioInfo {
        &self.track
    }

    pub fn counters(&self) -> &DecoderCounters {
        &self.counters
    }

    pub fn snapshot(&self) -> DecoderSnapshot {
        DecoderSnapshot::from(&self.counters, self.pending.len(), self.nesting.depth())
    }

    /// Advance through `buf` element by element.
    ///
    /// Returns how many bytes were consumed and whether the walk stopped on
    /// a fault. The count ends on an element boundary or inside an opaque
    /// body that is being skipped.
    fn walk(&mut self, buf: &[u8], out: &mut Vec<ChannelPair>) -> (usize, Result<(), DecodeError>) {
        let view = ByteView::new(buf);
        let mut pos = 0usize;

        loop {
            if self.skip_remaining > 0 {
                let n = self.skip_remaining.min((view.len() - pos) as u64);
                pos += n as usize;
                self.skip_remaining -= n;
                self.counters.add_skip_progress(n);
                if self.skip_remaining > 0 {
                    break;
                }
            }

            let at = self.consumed + pos as u64;
            let closed = self.nesting.close_reached(at);
            self.on_closed(closed);

            if pos == view.len() {
                break;
            }
            match self.step(view, pos, at, out) {
                Ok(Some(advance)) => pos += advance,
                Ok(None) => break,
                Err(err) => return (pos, Err(err)),
            }
        }

        (pos, Ok(()))
    }

    /// Handle the element starting at `pos` (absolute offset `at`).
    ///
    /// `Ok(None)` means the element is not complete yet; nothing was consumed.
    fn step(
        &mut self,
        view: ByteView<'_>,
        pos: usize,
        at: u64,
        out: &mut Vec<ChannelPair>,
    ) -> Result<Option<usize>, DecodeError> {
        let Some(header) = read_element_header(view, pos)? else {
            return Ok(None);
        };
        let element_type = header.element_type;
        trace!("{} ({}) at {} size {:?}", element_type, header.id, at, header.size);

        let closed = self.nesting.close_implicit(element_type);
        self.on_closed(closed);

        let body_start = at + header.header_len as u64;
        if let ElementSize::Known(size) = header.size {
            let end = body_start.saturating_add(size);
            if let Some(limit) = self.nesting.innermost_end() {
                if end > limit {
                    return Err(DecodeError::ContainerOverrun { id: header.id, offset: at, end, limit });
                }
            }
        }

        if element_type.is_container() {
            self.open_container(element_type, at, header.size.known().map(|s| body_start.saturating_add(s)));
            self.counters.add_container(header.header_len);
            return Ok(Some(header.header_len));
        }

        let ElementSize::Known(size) = header.size else {
            return Err(DecodeError::UnknownSizeLeaf { id: header.id, offset: at });
        };

        let layout = match element_type.kind() {
            ElementKind::Audio => self.layout()?,
            _ => ContentLayout::default(),
        };
        let body = pos + header.header_len;
        let Some(content) = read_element_content(view, body, element_type, size, &layout)? else {
            return Ok(None);
        };

        // never skip past the bytes we actually hold
        let total = header.header_len as u64 + content.length;
        let available = (view.len() - pos) as u64;
        if total > available {
            if element_type.kind() != ElementKind::Opaque {
                return Ok(None);
            }
            // opaque bodies are dropped as they arrive instead of buffered
            trace!("skipping {} at {}: {} of {} bytes present", element_type, at, available, total);
            self.skip_remaining = total - available;
            self.counters.add_skipped(available);
            return Ok(Some(view.len() - pos));
        }
        let end = pos + total as usize;

        match content.content {
            Some(pair) => {
                self.counters.add_audio(total, pair.frames());
                out.push(pair);
            }
            None if element_type.kind() == ElementKind::Audio => {
                trace!("block at {} filtered out by track", at);
                self.counters.add_filtered(total);
            }
            None => {
                if element_type.kind() == ElementKind::Metadata {
                    self.apply_metadata(element_type, &view.as_slice()[body..end])?;
                }
                self.counters.add_skipped(total);
            }
        }

        Ok(Some(end - pos))
    }

    fn open_container(&mut self, element_type: ElementType, start: u64, end: Option<u64>) {
        debug!("open {} at {} (end {:?})", element_type, start, end);
        match element_type {
            ElementType::TrackEntry => self.entry = Some(TrackEntryState::default()),
            ElementType::Audio => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.has_audio = true;
                }
            }
            _ => {}
        }
        self.nesting.push(OpenContainer { element_type, start, end });
    }

    fn on_closed(&mut self, closed: Vec<OpenContainer>) {
        for container in closed.into_iter().rev() {
            debug!(
                "close {} opened at {}{}",
                container.element_type,
                container.start,
                if container.end.is_none() { " (implicit end)" } else { "" }
            );
            if container.element_type != ElementType::TrackEntry {
                continue;
            }
            if let Some(entry) = self.entry.take() {
                if entry.has_audio && self.track.is_empty() {
                    let mut info = entry.info;
                    info.channels.get_or_insert(u64::from(TRACK_DEFAULT_CHANNELS));
                    debug!("audio track: {:?}", info);
                    self.track = info;
                }
            }
        }
    }

    fn apply_metadata(&mut self, element_type: ElementType, payload: &[u8]) -> Result<(), DecodeError> {
        let info = match self.entry.as_mut() {
            Some(entry) => &mut entry.info,
            None => &mut self.track,
        };
        match element_type {
            ElementType::TrackNumber => info.track_number = Some(read_uint(payload, element_type)?),
            ElementType::Channels => info.channels = Some(read_uint(payload, element_type)?),
            ElementType::BitDepth => info.bit_depth = Some(read_uint(payload, element_type)?),
            ElementType::SamplingFrequency => {
                info.sampling_frequency = Some(read_float(payload, element_type)?)
            }
            _ => {}
        }
        Ok(())
    }

    /// Sample layout for the next audio block: config first, then track metadata.
    fn layout(&self) -> Result<ContentLayout, DecodeError> {
        let channels = match (self.config.channels, self.track.channels) {
            (Some(ch), _) => ch,
            (None, Some(ch)) if (1..=u64::from(MAX_CHANNELS)).contains(&ch) => ch as u8,
            (None, Some(ch)) => return Err(DecodeError::UnsupportedChannels(ch)),
            (None, None) => DEFAULT_CHANNELS,
        };

        let format = match (self.config.sample_format, self.track.bit_depth) {
            (Some(format), _) => format,
            (None, Some(bits)) => {
                SampleFormat::from_bit_depth(bits).ok_or(DecodeError::UnsupportedBitDepth(bits))?
            }
            (None, None) => SampleFormat::default(),
        };

        Ok(ContentLayout {
            channels,
            format,
            framing: self.config.framing,
            track: self.config.track_number.or(self.track.track_number),
        })
    }

    fn check_pending_limit(&self) -> Result<(), DecodeError> {
        if self.pending.len() > self.config.max_pending_bytes {
            return Err(DecodeError::PendingLimitExceeded {
                pending: self.pending.len(),
                limit: self.config.max_pending_bytes,
            });
        }
        Ok(())
    }
}
