use super::node::NodeId;

/// A compact representation of the child edges of a [`TrieNode`](super::node::TrieNode)
/// that doesn't allocate until there are at least three children.
///
/// Edges are always kept sorted by their character label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Children {
    /// No children.
    #[default]
    None,
    /// Exactly one child (letter, node).
    One((char, NodeId)),
    /// Exactly two children (letter1, node1, letter2, node2), `letter1 < letter2`.
    Two((char, NodeId, char, NodeId)),
    /// Three or more children stored in a sorted vector.
    Many(Vec<(char, NodeId)>),
}

impl Children {
    /// Gets the edge at the specified position in label order.
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub fn get_index(&self, index: usize) -> Option<(char, NodeId)> {
        match self {
            Children::None => None,
            Children::One(child) => match index {
                0 => Some(*child),
                _ => None,
            },
            Children::Two((c1, n1, c2, n2)) => match index {
                0 => Some((*c1, *n1)),
                1 => Some((*c2, *n2)),
                _ => None,
            },
            Children::Many(children) => children.get(index).copied(),
        }
    }

    /// Returns the node that `letter`'s edge leads to, or `None` if no such edge exists.
    #[inline]
    pub fn get(&self, letter: char) -> Option<NodeId> {
        match self {
            Children::None => None,
            Children::One((ch, node)) => (*ch == letter).then_some(*node),
            Children::Two((c1, n1, c2, n2)) => {
                if letter == *c1 {
                    Some(*n1)
                } else if letter == *c2 {
                    Some(*n2)
                } else {
                    None
                }
            }
            Children::Many(children) => children
                .binary_search_by_key(&letter, |&(c, _)| c)
                .ok()
                .map(|pos| children[pos].1),
        }
    }

    /// Points the edge labeled `letter` at `node`, adding the edge in sorted
    /// position if it does not exist yet.
    ///
    /// Returns the node the edge previously led to, if any.
    pub fn set(&mut self, letter: char, node: NodeId) -> Option<NodeId> {
        match self {
            Children::None => {
                *self = Children::One((letter, node));
                None
            }
            Children::One((c1, n1)) => {
                if *c1 == letter {
                    return Some(std::mem::replace(n1, node));
                }
                *self = if letter < *c1 {
                    Children::Two((letter, node, *c1, *n1))
                } else {
                    Children::Two((*c1, *n1, letter, node))
                };
                None
            }
            Children::Two((c1, n1, c2, n2)) => {
                if *c1 == letter {
                    return Some(std::mem::replace(n1, node));
                }
                if *c2 == letter {
                    return Some(std::mem::replace(n2, node));
                }
                let mut v = vec![(*c1, *n1), (*c2, *n2), (letter, node)];
                v.sort_by_key(|&(c, _)| c);
                *self = Children::Many(v);
                None
            }
            Children::Many(children) => {
                match children.binary_search_by_key(&letter, |&(c, _)| c) {
                    Ok(pos) => Some(std::mem::replace(&mut children[pos].1, node)),
                    Err(pos) => {
                        children.insert(pos, (letter, node));
                        None
                    }
                }
            }
        }
    }

    /// Returns the number of edges.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Children::None => 0,
            Children::One(_) => 1,
            Children::Two(_) => 2,
            Children::Many(children) => children.len(),
        }
    }

    /// True if there are no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Children::None)
    }

    /// Returns an iterator over the edges in ascending label order.
    #[inline]
    pub fn iter(&self) -> ChildIter<'_> {
        ChildIter {
            children: self,
            index: Some(0),
        }
    }
}

/// An iterator over the child edges of a node.
#[derive(Clone)]
pub struct ChildIter<'a> {
    children: &'a Children,
    index: Option<usize>,
}

impl Iterator for ChildIter<'_> {
    type Item = (char, NodeId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let index = self.index?;
        let next_child = self.children.get_index(index);
        self.index = if next_child.is_some() {
            index.checked_add(1)
        } else {
            None
        };
        next_child
    }

    /// Since we know the exact size, we can do better than the default implementation.
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.index {
            Some(i) => self.children.len().saturating_sub(i),
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ChildIter<'_> {}
