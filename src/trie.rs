//! Provides a simple Trie implementation for storing keys composed of
//! sequences of atoms, with prefix based autocomplete.
//!
//! Atoms must support the TrieAtom trait. Any `IntoIterator` over atoms can
//! be used as a key, so it is up to the user to decide what kind of atoms to
//! use to make most sense of the keys being stored: chars, grapheme clusters,
//! whole words, numbers...
//!
//! Example 1
//! ```
//! use suggesting::trie::Trie;
//!
//! let mut trie = Trie::new();
//! for word in ["a", "at", "al", "alt"] {
//!     trie.insert(word.chars()).unwrap();
//! }
//!
//! assert!(trie.search("alt".chars()));
//! assert_eq!(trie.autocomplete("al".chars()), Some(vec!['t']));
//! assert!(trie.delete("alt".chars()).is_ok());
//! assert!(!trie.search("alt".chars()));
//! assert!(trie.search("al".chars()));
//! ```
//!
//! There is no end-of-key marker unless one is configured, so every path
//! which exists is reported as present.
//!
//! Example 2
//! ```
//! use suggesting::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("bold".chars()).unwrap();
//! assert!(trie.search("bol".chars()));
//! assert!(!trie.contains_key("bol".chars()));
//! ```
//!
//! Example 3
//! ```
//! use suggesting::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("the quick brown fox".split_whitespace()).unwrap();
//! trie.insert("the quick red fox".split_whitespace()).unwrap();
//! assert_eq!(
//!     trie.autocomplete("the quick".split_whitespace()),
//!     Some(vec!["brown", "red"])
//! );
//! ```
//!
//! Deleting a key removes only its trailing node (and anything below it).
//! Ancestors left without children stay allocated unless
//! [`crate::config::TrieConfig::prune_on_delete`] is set.
//!
//! A Trie is not synchronised. Mutation requires `&mut self`; wrap the whole
//! trie in a single lock if it must be shared between threads.

use tracing::{debug, trace};

use crate::config::TrieConfig;
use crate::error::{TrieError, TrieResult};
use crate::node::{NodeId, Nodes, TrieAtom, ROOT};

/// Stores a key of atoms as individual nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Trie<A> {
    pub(crate) nodes: Nodes<A>,
    config: TrieConfig,
}

/// A Trie of chars, the most common way to store strings.
pub type TrieString = Trie<char>;

impl<A: TrieAtom> Default for Trie<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: TrieAtom> Trie<A> {
    /// Create a new Trie.
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Create a new Trie with the supplied configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            nodes: Nodes::default(),
            config,
        }
    }

    /// The configuration this Trie was created with.
    pub fn config(&self) -> TrieConfig {
        self.config
    }

    /// Clear the Trie. The configuration is kept.
    pub fn clear(&mut self) {
        self.nodes = Nodes::default();
    }

    /// Is the Trie empty?
    pub fn is_empty(&self) -> bool {
        self.nodes.children(ROOT).is_empty()
    }

    /// How many nodes (excluding the root) does the Trie hold?
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Insert the key into the Trie, creating a node for each missing atom.
    /// Inserting a key which is already present changes nothing.
    ///
    /// Fails with [`TrieError::InvalidKey`] if the key has no atoms.
    pub fn insert<K: IntoIterator<Item = A>>(&mut self, key: K) -> TrieResult<()> {
        let mut atoms = key.into_iter().peekable();
        if atoms.peek().is_none() {
            debug!("rejected insert of an empty key");
            return Err(TrieError::InvalidKey);
        }

        let mut node = ROOT;
        let mut len = 0;
        for atom in atoms {
            node = self.nodes.add(node, atom);
            len += 1;
        }
        self.nodes.get_mut(node).terminated = true;
        trace!(atoms = len, nodes = self.nodes.len(), "inserted key");
        Ok(())
    }

    /// Delete the key's trailing atom from the Trie.
    ///
    /// Every atom but the last must lead to an existing node, otherwise
    /// [`TrieError::NotFound`] is returned and nothing changes. Success is
    /// reported whether or not the last atom itself was present. The removed
    /// node takes its whole subtree with it, unless terminal markers are
    /// configured and other keys continue below it, in which case only its
    /// marker is cleared.
    ///
    /// Fails with [`TrieError::InvalidKey`] if the key has no atoms.
    pub fn delete<K: IntoIterator<Item = A>>(&mut self, key: K) -> TrieResult<()> {
        let atoms: Vec<A> = key.into_iter().collect();
        let (last, path) = match atoms.split_last() {
            Some(split) => split,
            None => {
                debug!("rejected delete of an empty key");
                return Err(TrieError::InvalidKey);
            }
        };
        let parent = match self.walk(path.iter().copied()) {
            Some(n) => n,
            None => {
                debug!(atoms = atoms.len(), "delete path not found");
                return Err(TrieError::NotFound);
            }
        };

        if self.config.terminal_markers {
            if let Some(target) = self.nodes.find(parent, *last) {
                let node = self.nodes.get_mut(target);
                if node.has_children {
                    node.terminated = false;
                    trace!(atoms = atoms.len(), "unmarked key");
                    return Ok(());
                }
            }
        }

        self.nodes.remove(parent, *last);
        if self.config.prune_on_delete {
            self.prune(parent);
        }
        trace!(atoms = atoms.len(), nodes = self.nodes.len(), "deleted key");
        Ok(())
    }

    /// Does the path spelled by the key exist in the Trie?
    ///
    /// Without terminal markers this is also true for any prefix of an
    /// inserted key. The empty key never matches.
    pub fn search<K: IntoIterator<Item = A>>(&self, key: K) -> bool {
        match self.walk(key) {
            None | Some(ROOT) => false,
            Some(node) => !self.config.terminal_markers || self.nodes.get(node).terminated,
        }
    }

    /// Was the key inserted (and not since deleted)? Unlike
    /// [`Trie::search`], prefixes of longer keys do not count, whatever the
    /// configuration.
    pub fn contains_key<K: IntoIterator<Item = A>>(&self, key: K) -> bool {
        match self.walk(key) {
            None | Some(ROOT) => false,
            Some(node) => self.nodes.get(node).terminated,
        }
    }

    /// Get the atoms which may immediately follow the prefix, in the order
    /// they were first inserted. Returns None if the prefix is not present.
    ///
    /// The empty prefix yields the first atoms of every key.
    pub fn autocomplete<P: IntoIterator<Item = A>>(&self, prefix: P) -> Option<Vec<A>> {
        let node = match self.walk(prefix) {
            Some(n) => n,
            None => {
                debug!("autocomplete prefix not found");
                return None;
            }
        };
        let continuations: Vec<A> = self
            .nodes
            .children(node)
            .iter()
            .map(|child| self.nodes.get(*child).label)
            .collect();
        trace!(continuations = continuations.len(), "autocompleted prefix");
        Some(continuations)
    }

    fn walk<K: IntoIterator<Item = A>>(&self, key: K) -> Option<NodeId> {
        key.into_iter()
            .try_fold(ROOT, |node, atom| self.nodes.find(node, atom))
    }

    fn prune(&mut self, mut id: NodeId) {
        while id != ROOT {
            let node = self.nodes.get(id);
            if node.has_children || node.terminated {
                break;
            }
            let (parent, label) = match node.parent {
                Some(parent) => (parent, node.label),
                None => break,
            };
            self.nodes.remove(parent, label);
            id = parent;
        }
    }
}

impl<A: TrieAtom, K: IntoIterator<Item = A>> Extend<K> for Trie<A> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            // Empty keys are skipped
            let _ = self.insert(key);
        }
    }
}

impl<A: TrieAtom, K: IntoIterator<Item = A>> FromIterator<K> for Trie<A> {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(keys);
        trie
    }
}
