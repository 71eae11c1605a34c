//! Behavioural switches for a [`crate::trie::Trie`].
//!
//! The defaults reproduce the classic behaviour of this trie: there is no
//! end-of-key marker, so any path which exists is reported as present, and
//! deleting a key leaves empty ancestors behind. Both can be changed:
//!
//! ```
//! use suggesting::config::TrieConfig;
//! use suggesting::trie::Trie;
//!
//! let mut trie = Trie::with_config(TrieConfig::default().terminal_markers(true));
//! trie.insert("bold".chars()).unwrap();
//! assert!(trie.search("bold".chars()));
//! assert!(!trie.search("bol".chars()));
//! ```

/// Options fixed when a trie is created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrieConfig {
    pub(crate) terminal_markers: bool,
    pub(crate) prune_on_delete: bool,
}

impl TrieConfig {
    /// Only report keys which were inserted, rather than any existing path.
    ///
    /// Deleting a key which is still a prefix of other keys then clears its
    /// marker instead of cutting away the longer keys.
    pub fn terminal_markers(self, enabled: bool) -> Self {
        Self {
            terminal_markers: enabled,
            ..self
        }
    }

    /// After a delete, remove ancestors left without children unless a key
    /// ends on them.
    pub fn prune_on_delete(self, enabled: bool) -> Self {
        Self {
            prune_on_delete: enabled,
            ..self
        }
    }

    /// Are terminal markers enabled?
    pub fn has_terminal_markers(&self) -> bool {
        self.terminal_markers
    }

    /// Is pruning on delete enabled?
    pub fn prunes_on_delete(&self) -> bool {
        self.prune_on_delete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_defaults_to_classic_behaviour() {
        let config = TrieConfig::default();
        assert!(!config.has_terminal_markers());
        assert!(!config.prunes_on_delete());
    }

    #[test]
    fn it_sets_options_independently() {
        let config = TrieConfig::default()
            .terminal_markers(true)
            .prune_on_delete(true)
            .terminal_markers(false);
        assert!(!config.has_terminal_markers());
        assert!(config.prunes_on_delete());
    }
}
