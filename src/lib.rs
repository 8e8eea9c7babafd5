//! Shortest edit scripts between two sequences.
//!
//! The [`myers`] module finds a minimal list of single-symbol insertions and
//! deletions, [`normalize`] folds it into runs and updates, and
//! [`serialization`] renders the result.

pub mod config;
pub mod error;
pub mod myers;
pub mod normalize;
pub mod patch;
pub mod serialization;

pub use config::DiffOptions;
pub use error::{ApplyError, DiffError};
pub use myers::{Diff, EditOperation, OperationKind};

use tracing::warn;

/// Computes the normalized edit script turning `original` into `modified`.
///
/// # Examples
///
/// ```
/// use shortedit::{diff, EditOperation};
///
/// let old: Vec<char> = "abef".chars().collect();
/// let new: Vec<char> = "abcdef".chars().collect();
/// assert_eq!(diff(&old, &new), vec![EditOperation::insert(2, vec!['c', 'd'])]);
/// ```
pub fn diff<T: Eq + Clone>(original: &[T], modified: &[T]) -> Diff<T> {
    normalize::normalize(myers::edit_script(original, modified))
}

/// Computes the diff between two strings symbol by symbol.
pub fn diff_chars(original: &str, modified: &str) -> Diff<char> {
    let old: Vec<char> = original.chars().collect();
    let new: Vec<char> = modified.chars().collect();
    diff(&old, &new)
}

/// Computes the diff between two strings after breaking them into newlines
/// and running `diff`.
pub fn diff_lines(original: &str, modified: &str) -> Diff<String> {
    let old_lines: Vec<String> = original.split('\n').map(ToString::to_string).collect();
    let new_lines: Vec<String> = modified.split('\n').map(ToString::to_string).collect();
    diff(&old_lines, &new_lines)
}

/// Stateless diff service carrying [`DiffOptions`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Differ {
    options: DiffOptions,
}

impl Differ {
    #[must_use]
    pub const fn new(options: DiffOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &DiffOptions {
        &self.options
    }

    fn check_len(&self, len: usize) -> Result<(), DiffError> {
        match self.options.max_input_len() {
            Some(limit) if len > limit => {
                warn!(len, limit, "refusing to diff oversized input");
                Err(DiffError::InputTooLarge { len, limit })
            }
            _ => Ok(()),
        }
    }

    /// Normalized edit script, or [`DiffError::InputTooLarge`] before any
    /// work is done.
    pub fn diff<T: Eq + Clone>(&self, original: &[T], modified: &[T]) -> Result<Diff<T>, DiffError> {
        self.check_len(original.len() + modified.len())?;
        Ok(diff(original, modified))
    }

    /// Raw single-symbol edit script, sorted by position.
    pub fn edit_script<T: Eq + Clone>(
        &self,
        original: &[T],
        modified: &[T],
    ) -> Result<Diff<T>, DiffError> {
        self.check_len(original.len() + modified.len())?;
        Ok(myers::edit_script(original, modified))
    }

    pub fn edit_distance<T: Eq>(&self, original: &[T], modified: &[T]) -> Result<usize, DiffError> {
        self.check_len(original.len() + modified.len())?;
        Ok(myers::edit_distance(original, modified))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_identical() {
        assert!(diff_chars("a", "a").is_empty());
    }

    #[test]
    fn test_leading_delete() {
        assert_eq!(diff_chars("ab", "b"), vec![EditOperation::delete(0, vec!['a'])]);
    }

    #[test]
    fn test_replacement_becomes_update() {
        assert_eq!(diff_chars("abc", "axc"), vec![EditOperation::update(1, vec!['x'])]);
    }

    #[test]
    fn test_trailing_insert() {
        assert_eq!(diff_chars("cat", "cats"), vec![EditOperation::insert(3, vec!['s'])]);
    }

    #[test]
    fn test_inserts_merge() {
        assert_eq!(
            diff_chars("abef", "abcdef"),
            vec![EditOperation::insert(2, chars("cd"))]
        );
    }

    #[test]
    fn test_both_empty() {
        assert!(diff_chars("", "").is_empty());
    }

    #[test]
    fn test_one_side_empty() {
        assert_eq!(diff_chars("", "abc"), vec![EditOperation::insert(0, chars("abc"))]);
        assert_eq!(diff_chars("abc", ""), vec![EditOperation::delete(0, chars("abc"))]);
    }

    #[test]
    fn test_full_rewrite() {
        assert_eq!(
            diff_chars("123456", "789878"),
            vec![EditOperation::update(0, chars("789878"))]
        );
    }

    #[test]
    fn test_diff_lines() {
        let old = "hello\nworld\nfoo";
        let new = "hello\nrust\nfoo";
        assert_eq!(
            diff_lines(old, new),
            vec![EditOperation::update(1, vec!["rust".to_string()])]
        );
    }

    #[test]
    fn test_differ_limit() {
        let differ = Differ::new(DiffOptions::new().with_max_input_len(4));
        assert_eq!(
            differ.diff(&chars("abc"), &chars("ab")),
            Err(DiffError::InputTooLarge { len: 5, limit: 4 })
        );
        assert_eq!(
            differ.edit_distance(&chars("ab"), &chars("ba")),
            Ok(2)
        );
        assert_eq!(
            differ.edit_script(&chars("ab"), &chars("b")),
            Ok(vec![EditOperation::delete(0, vec!['a'])])
        );
    }

    #[test]
    fn test_differ_default_is_unbounded() {
        let differ = Differ::default();
        let old = vec![0u8; 300];
        let new = vec![1u8; 300];
        assert_eq!(differ.edit_distance(&old, &new), Ok(600));
    }
}
