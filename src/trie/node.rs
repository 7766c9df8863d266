use super::children::{ChildIter, Children};

/// A stable handle to a node owned by a [`Trie`](super::tree::Trie).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node of every trie.
    pub const ROOT: NodeId = NodeId(0);

    /// Panics past `u32::MAX`; see the `# Panics` note on `Trie::insert`.
    pub(crate) fn from_index(index: usize) -> Self {
        NodeId(u32::try_from(index).expect("trie node count exceeds u32::MAX"))
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the prefix tree.
///
/// Every node caches `value`, the string spelled by the edges from the root
/// down to it, so reporting a word never has to rebuild it from the path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrieNode {
    value: String,
    children: Children,
    terminal: bool,
    frequency: i64,
}

impl TrieNode {
    /// Creates a node without children.
    ///
    /// # Arguments
    ///
    /// * `value` - The string spelled from the root to this node
    /// * `terminal` - Whether this node represents the end of a valid word
    pub fn new(value: String, terminal: bool) -> Self {
        TrieNode {
            value,
            children: Children::None,
            terminal,
            frequency: 0,
        }
    }

    /// The string spelled from the root to this node. Empty for the root.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The label of the edge leading into this node, `None` for the root.
    #[inline]
    pub fn last_char(&self) -> Option<char> {
        self.value.chars().next_back()
    }

    /// True if this node corresponds to the end of a word.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// The word's frequency. Only meaningful on terminal nodes; 0 means the
    /// word is unweighted or has not been encountered yet.
    #[inline]
    pub fn frequency(&self) -> i64 {
        self.frequency
    }

    /// True if an edge labeled `letter` leaves this node.
    #[inline]
    pub fn has_child(&self, letter: char) -> bool {
        self.children.get(letter).is_some()
    }

    /// Returns the node that `letter`'s edge leads to, or `None` if no such edge exists.
    #[inline]
    pub fn child_for(&self, letter: char) -> Option<NodeId> {
        self.children.get(letter)
    }

    /// Attaches `child` under `letter`, returning the previous child for that letter.
    pub fn set_child(&mut self, letter: char, child: NodeId) -> Option<NodeId> {
        self.children.set(letter, child)
    }

    /// Returns an iterator over all children of this node, in ascending letter order.
    #[inline]
    pub fn children(&self) -> ChildIter<'_> {
        self.children.iter()
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub(crate) fn set_terminal(&mut self) {
        self.terminal = true;
    }

    pub(crate) fn set_frequency(&mut self, frequency: i64) {
        self.frequency = frequency;
    }
}
