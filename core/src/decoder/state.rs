//! Cross-call bookkeeping for the chunk decoder: open containers and the
//! audio track configuration read from `Tracks`.

use crate::ebml::element::{ElementType, Parent};

/// A container whose children are still being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenContainer {
    pub element_type: ElementType,
    /// Absolute stream offset of the container's header.
    pub start: u64,
    /// Absolute offset one past its last byte; `None` for unknown size.
    pub end: Option<u64>,
}

/// Stack of open containers, outermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NestingStack {
    open: Vec<OpenContainer>,
}

impl NestingStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn push(&mut self, container: OpenContainer) {
        self.open.push(container);
    }

    pub fn iter(&self) -> impl Iterator<Item = &OpenContainer> {
        self.open.iter()
    }

    pub fn clear(&mut self) {
        self.open.clear();
    }

    /// Tightest declared end among open containers.
    pub fn innermost_end(&self) -> Option<u64> {
        self.open.iter().filter_map(|c| c.end).min()
    }

    /// Close every container whose declared end is at or before `at`,
    /// together with everything nested inside it. Returned outermost first.
    pub fn close_reached(&mut self, at: u64) -> Vec<OpenContainer> {
        match self.open.iter().position(|c| c.end.is_some_and(|end| end <= at)) {
            Some(idx) => self.open.split_off(idx),
            None => Vec::new(),
        }
    }

    /// Close unknown-size containers that cannot hold an element of type `next`.
    ///
    /// A recognized element ends every unknown-size container stacked above
    /// its parent. If the parent is not open at all, an open unknown-size
    /// container of the same type is treated as a finished sibling.
    /// Unrecognized elements and known-size containers never close anything here.
    pub fn close_implicit(&mut self, next: ElementType) -> Vec<OpenContainer> {
        let floor = self.unknown_suffix_start();
        let keep = match next.parent() {
            Parent::Any => return Vec::new(),
            Parent::Root => floor,
            Parent::Element(parent) => {
                if let Some(idx) = self.position_of(parent) {
                    floor.max(idx + 1)
                } else if let Some(idx) = self.position_of(next) {
                    floor.max(idx)
                } else {
                    return Vec::new();
                }
            }
        };

        if keep >= self.open.len() {
            return Vec::new();
        }
        self.open.split_off(keep)
    }

    /// Bytes still owed to known-size containers once `at` bytes have been consumed.
    pub fn missing_bytes(&self, at: u64) -> u64 {
        self.open
            .iter()
            .filter_map(|c| c.end)
            .map(|end| end.saturating_sub(at))
            .max()
            .unwrap_or(0)
    }

    fn position_of(&self, element_type: ElementType) -> Option<usize> {
        self.open.iter().rposition(|c| c.element_type == element_type)
    }

    /// Index where the trailing run of unknown-size containers begins.
    fn unknown_suffix_start(&self) -> usize {
        self.open.iter().rposition(|c| c.end.is_some()).map_or(0, |i| i + 1)
    }
}

/// Audio track configuration taken from the stream's `Tracks` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackAudioInfo {
    pub track_number: Option<u64>,
    pub channels: Option<u64>,
    pub sampling_frequency: Option<f64>,
    pub bit_depth: Option<u64>,
}

impl TrackAudioInfo {
    pub fn is_empty(&self) -> bool {
        self.track_number.is_none()
            && self.channels.is_none()
            && self.sampling_frequency.is_none()
            && self.bit_depth.is_none()
    }
}

/// Metadata collected inside the `TrackEntry` currently being read.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct TrackEntryState {
    pub info: TrackAudioInfo,
    pub has_audio: bool,
}
