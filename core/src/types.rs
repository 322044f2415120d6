use crate::ebml::content::ContentError;
use crate::ebml::element::ElementId;
use crate::ebml::vint::VintError;

/// Unified decoder fault.
/// - `From` impls let `?` cross the vint / content layers.
/// - "Not enough bytes yet" is never an error; readers return `Ok(None)` for it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodeError {
    #[error("vint error: {0}")]
    Vint(#[from] VintError),

    #[error("content error: {0}")]
    Content(#[from] ContentError),

    /// A leaf element declared the unknown-size sentinel.
    #[error("element {id} at offset {offset} has unknown size, which is only allowed on containers")]
    UnknownSizeLeaf { id: ElementId, offset: u64 },

    /// An element ends past the end of the container that encloses it.
    #[error("element {id} at offset {offset} ends at {end}, past its container's end {limit}")]
    ContainerOverrun { id: ElementId, offset: u64, end: u64, limit: u64 },

    /// The stream ended with bytes still pending or a container still open.
    #[error("truncated stream: {pending_bytes} bytes pending, {missing_bytes} container bytes missing")]
    Truncated { pending_bytes: usize, missing_bytes: u64 },

    #[error("pending buffer of {pending} bytes exceeds the limit of {limit}")]
    PendingLimitExceeded { pending: usize, limit: usize },

    #[error("unsupported channel count: {0}")]
    UnsupportedChannels(u64),

    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(u64),

    #[error("invalid decoder config: {0}")]
    InvalidConfig(String),

    /// An earlier fault stopped this decoder; call `reset` to start over.
    #[error("decoder halted after an earlier fault: {0}")]
    Halted(Box<DecodeError>),
}

impl DecodeError {
    /// True for faults caused by the stream's structure rather than its length.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            DecodeError::Vint(_)
                | DecodeError::Content(_)
                | DecodeError::UnknownSizeLeaf { .. }
                | DecodeError::ContainerOverrun { .. }
        )
    }
}
