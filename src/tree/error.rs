use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for ordered tree operations.
///
/// All variants are raised synchronously at the call that violates the
/// precondition; the tree has no transient failure modes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Error when a rank-based access lies outside `[0, size)`.
    #[error("rank {index} is out of range for a tree of {size} element(s)")]
    IndexOutOfRange { index: usize, size: usize },

    /// Error when `first` or `last` is called on an empty tree.
    #[error("tree is empty")]
    EmptyCollection,
}
