//! Node storage for the [`crate::trie::Trie`].
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. A parent
//! owns its children through the arena; the `parent` field of a node is a
//! plain index used for layout decisions and never keeps anything alive.

/// Atoms which we wish to store in a Trie must implement
/// TrieAtom.
pub trait TrieAtom: Copy + Default + PartialEq {}

// Blanket implementation which satisfies the compiler
impl<A> TrieAtom for A where A: Copy + Default + PartialEq {}

/// Index of a node inside a [`Nodes`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Node<A> {
    pub(crate) label: A,
    pub(crate) children: Vec<NodeId>,
    pub(crate) has_children: bool,
    pub(crate) parent: Option<NodeId>,
    pub(crate) terminated: bool,
}

impl<A: TrieAtom> Node<A> {
    fn new(label: A, parent: NodeId) -> Self {
        Self {
            label,
            parent: Some(parent),
            ..Default::default()
        }
    }
}

/// The root always occupies the first slot.
pub(crate) const ROOT: NodeId = NodeId(0);

/// Arena of trie nodes.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Nodes<A> {
    slots: Vec<Option<Node<A>>>,
    free: Vec<usize>,
    live: usize,
}

impl<A: TrieAtom> Default for Nodes<A> {
    fn default() -> Self {
        Self {
            slots: vec![Some(Node::default())],
            free: vec![],
            live: 0,
        }
    }
}

impl<A: TrieAtom> Nodes<A> {
    /// Number of live nodes, not counting the root.
    pub(crate) fn len(&self) -> usize {
        self.live
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node<A> {
        // Ids are only handed out for live slots and invalidated on removal
        match self.slots.get(id.0) {
            Some(Some(node)) => node,
            _ => unreachable!("stale node id {:?}", id),
        }
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<A> {
        match self.slots.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => unreachable!("stale node id {:?}", id),
        }
    }

    /// The full ordered children of a node.
    pub(crate) fn children(&self, id: NodeId) -> &[NodeId] {
        &self.get(id).children
    }

    /// Find the child of `id` labelled `atom`.
    pub(crate) fn find(&self, id: NodeId, atom: A) -> Option<NodeId> {
        self.get(id)
            .children
            .iter()
            .copied()
            .find(|child| self.get(*child).label == atom)
    }

    /// Add a child labelled `atom` below `id` unless one already exists.
    /// Returns the id of the new or existing child.
    pub(crate) fn add(&mut self, id: NodeId, atom: A) -> NodeId {
        self.get_mut(id).has_children = true;
        if let Some(existing) = self.find(id, atom) {
            return existing;
        }
        let child = self.alloc(Node::new(atom, id));
        self.get_mut(id).children.push(child);
        child
    }

    /// Remove every child of `id` labelled `atom`, along with their subtrees.
    pub(crate) fn remove(&mut self, id: NodeId, atom: A) {
        let (removed, kept): (Vec<NodeId>, Vec<NodeId>) = self
            .get(id)
            .children
            .iter()
            .copied()
            .partition(|child| self.get(*child).label == atom);
        let node = self.get_mut(id);
        node.has_children = !kept.is_empty();
        node.children = kept;
        for child in removed {
            self.release(child);
        }
    }

    fn alloc(&mut self, node: Node<A>) -> NodeId {
        self.live += 1;
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                NodeId(idx)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(node) = self.slots.get_mut(next.0).and_then(Option::take) {
                pending.extend(node.children);
                self.free.push(next.0);
                self.live -= 1;
            }
        }
    }
}
