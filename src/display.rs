//! Human readable rendering of a [`crate::trie::Trie`].
//!
//! Every child of the root starts a new line. Below that, an only child is
//! written straight after its parent, while the second and later children of
//! a branching node each start a new line, indented one space less than
//! their depth.
//!
//! An empty trie renders as the header line alone, where the classic layout
//! printed a single space.
//!
//! ```
//! use suggesting::trie::Trie;
//!
//! let mut trie = Trie::new();
//! for word in ["ab", "ac", "d"] {
//!     trie.insert(word.chars()).unwrap();
//! }
//! assert_eq!(trie.to_string(), "The Current Trie:\na b\n  c\n d");
//! ```

use std::fmt;

use crate::node::{NodeId, TrieAtom, ROOT};
use crate::trie::Trie;

const HEADER: &str = "The Current Trie:";

impl<A: TrieAtom + fmt::Display> fmt::Display for Trie<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(HEADER)?;
        for child in self.nodes.children(ROOT) {
            f.write_str("\n")?;
            self.fmt_subtree(f, *child)?;
        }
        Ok(())
    }
}

impl<A: TrieAtom + fmt::Display> Trie<A> {
    // Pre-order walk with an explicit stack, so key length never limits
    // rendering.
    fn fmt_subtree(&self, f: &mut fmt::Formatter<'_>, top: NodeId) -> fmt::Result {
        let mut pending: Vec<(NodeId, usize, bool)> = vec![(top, 1, false)];
        while let Some((id, depth, new_line)) = pending.pop() {
            let node = self.nodes.get(id);
            if new_line {
                write!(f, "\n{:width$}", "", width = depth - 1)?;
            }

            let siblings = node
                .parent
                .map_or(0, |parent| self.nodes.children(parent).len());
            if !node.has_children || siblings < 2 {
                write!(f, " {}", node.label)?;
            } else {
                write!(f, "{:width$}{}", "", node.label, width = depth - 1)?;
            }

            // Only a branching node's children can start a line of their own
            let branching = node.children.len() > 1;
            for (idx, child) in node.children.iter().enumerate().rev() {
                pending.push((*child, depth + 1, branching && idx != 0));
            }
        }
        Ok(())
    }
}
