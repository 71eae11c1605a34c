//! Provides a simple Trie implementation for storing keys composed of
//! sequences of atoms, with prefix based autocomplete and a human readable
//! rendering of the tree.
//!
//! Atoms must support the [`crate::node::TrieAtom`] trait. Any
//! `IntoIterator` over atoms is a key, so a `&str` can be stored char by
//! char, grapheme by grapheme or word by word.
//!
//! Since the most common use of a trie is to store the chars of a String,
//! a convenience type, [`crate::trie::TrieString`] is provided.
//!
//! By default the trie has no end-of-key marker: any path which exists is
//! reported as present, and deletion leaves empty ancestors behind. See
//! [`crate::config::TrieConfig`] to change either behaviour.
//!
//! Examples:
//! * trie : [`crate::trie`]
//! * rendering : [`crate::display`]
//! * configuration : [`crate::config`]
//!
//! Typical usages for this data structure:
//!  - Autocomplete suggestions
//!  - Prefix matching keys
//!  - ...

pub mod config;
pub mod display;
pub mod error;
pub mod node;
pub mod trie;

pub use config::TrieConfig;
pub use error::{TrieError, TrieResult};
pub use trie::{Trie, TrieString};
