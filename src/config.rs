/// Options for [`crate::Differ`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffOptions {
    max_input_len: Option<usize>,
}

impl DiffOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_input_len: None,
        }
    }

    /// Rejects inputs whose combined length is above `limit`.
    ///
    /// The trace grows with the square of the edit distance, which is at most
    /// the combined length, so this bounds memory as well as time.
    #[must_use]
    pub const fn with_max_input_len(mut self, limit: usize) -> Self {
        self.max_input_len = Some(limit);
        self
    }

    /// Returns the combined input length limit, if any (default: unbounded).
    #[must_use]
    pub const fn max_input_len(&self) -> Option<usize> {
        self.max_input_len
    }
}
