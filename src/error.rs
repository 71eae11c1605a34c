//! Errors reported by [`crate::trie::Trie`] operations.

use thiserror::Error;

/// Result type alias for fallible trie operations.
pub type TrieResult<T> = Result<T, TrieError>;

/// Reasons a trie operation can be rejected. No error is fatal and a
/// rejected operation never leaves the trie partially modified.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrieError {
    /// The key has no atoms.
    #[error("key must contain at least one atom")]
    InvalidKey,

    /// Part of the key's path has no corresponding node.
    #[error("key path is not present in the trie")]
    NotFound,
}
