use thiserror::Error;

/// Errors returned by [`crate::Differ`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    /// The combined input length exceeds the configured limit.
    #[error("input too large: {len} symbols (limit {limit})")]
    InputTooLarge {
        /// Length of the original plus the modified sequence.
        len: usize,
        /// Configured maximum.
        limit: usize,
    },
}

/// Errors returned by [`crate::patch::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("operation at {position} with length {len} is out of bounds")]
    OutOfBounds { position: usize, len: usize },
    #[error("deleted text at {position} does not match the original")]
    Mismatch { position: usize },
    #[error("deletions overlap at {position}")]
    Overlap { position: usize },
    #[error("update at {position} cannot be replayed")]
    Unsupported { position: usize },
}
