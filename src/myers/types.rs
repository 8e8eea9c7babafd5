/// Alias for a vector of EditOperation
/// Result of the Myers diff functions
pub type Diff<T> = Vec<EditOperation<T>>;

/// Each element in a diff is a contiguous run of symbols that is
/// new (Insert, positioned in the modified sequence)
/// removed (Delete, positioned in the original sequence)
/// replaced (Update, carrying the new content)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOperation<T> {
    Insert { position: usize, text: Vec<T> },
    Delete { position: usize, text: Vec<T> },
    Update { position: usize, text: Vec<T> },
}

/// The kind of an [`EditOperation`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Insert,
    Delete,
    Update,
}

impl OperationKind {
    /// Marker used in the first column of the CSV rendering.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            OperationKind::Insert => '+',
            OperationKind::Delete => '-',
            OperationKind::Update => '~',
        }
    }
}

impl<T> EditOperation<T> {
    pub fn insert(position: usize, text: Vec<T>) -> Self {
        EditOperation::Insert { position, text }
    }

    pub fn delete(position: usize, text: Vec<T>) -> Self {
        EditOperation::Delete { position, text }
    }

    pub fn update(position: usize, text: Vec<T>) -> Self {
        EditOperation::Update { position, text }
    }

    #[must_use]
    pub fn kind(&self) -> OperationKind {
        match self {
            EditOperation::Insert { .. } => OperationKind::Insert,
            EditOperation::Delete { .. } => OperationKind::Delete,
            EditOperation::Update { .. } => OperationKind::Update,
        }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            EditOperation::Insert { position, .. }
            | EditOperation::Delete { position, .. }
            | EditOperation::Update { position, .. } => *position,
        }
    }

    #[must_use]
    pub fn text(&self) -> &[T] {
        match self {
            EditOperation::Insert { text, .. }
            | EditOperation::Delete { text, .. }
            | EditOperation::Update { text, .. } => text,
        }
    }

    pub fn into_text(self) -> Vec<T> {
        match self {
            EditOperation::Insert { text, .. }
            | EditOperation::Delete { text, .. }
            | EditOperation::Update { text, .. } => text,
        }
    }

    /// One past the last position covered by the run.
    #[must_use]
    pub fn end(&self) -> usize {
        self.position() + self.text().len()
    }

    pub(crate) fn text_mut(&mut self) -> &mut Vec<T> {
        match self {
            EditOperation::Insert { text, .. }
            | EditOperation::Delete { text, .. }
            | EditOperation::Update { text, .. } => text,
        }
    }
}
