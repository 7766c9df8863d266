//! A growable arena for trie nodes.
//!
//! Nodes are never freed, so a slot index stays valid for the lifetime of the
//! arena and can be handed out as a [`NodeId`]. Used internally by
//! [`Trie`](super::tree::Trie).

use super::node::{NodeId, TrieNode};

/// An append-only arena addressed by [`NodeId`].
#[derive(Clone, Debug)]
pub(crate) struct NodeArena {
    nodes: Vec<TrieNode>,
}

impl NodeArena {
    /// Creates an arena holding only the root node.
    pub fn new() -> Self {
        NodeArena {
            nodes: vec![TrieNode::new(String::new(), false)],
        }
    }

    /// Allocates a node and returns its handle.
    pub fn alloc(&mut self, node: TrieNode) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(node);
        id
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut TrieNode {
        &mut self.nodes[id.index()]
    }

    /// Returns the number of nodes allocated in this arena, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        NodeArena::new()
    }
}
