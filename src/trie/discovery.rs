//! Finding every word that can be spelled from a bag of letters.
//!
//! A word qualifies if its letters form a sub-multiset of the bag: each letter
//! is used at most as many times as it occurs in the bag, and not every letter
//! has to be used. This is what anagram and word-game solvers need.
//!
//! The search runs in three phases over a [`Traversal`]:
//!
//! 1. [`Traversal::mark_reachable`] walks down every edge whose letter is still
//!    in the [`Pool`], taking the letter out for the subtree and putting it back
//!    before trying the siblings. Every node reached is marked.
//! 2. [`Traversal::collect_marked`] reports the marked terminal nodes.
//! 3. [`Traversal::reset`] clears the marks.
//!
//! Marks live in the `Traversal`, not in the trie, so any number of searches
//! can run against the same `&Trie` at once.

use std::time::Instant;

use hashbrown::{HashMap, HashSet};

use super::builder::IntoWord;
use super::node::NodeId;
use super::tree::Trie;

/// A multiset of letters.
///
/// # Examples
///
/// ```
/// use libtrie::trie::discovery::Pool;
///
/// let mut pool = Pool::new("abca");
/// assert_eq!(pool.count('a'), 2);
/// assert!(pool.take('c'));
/// assert!(!pool.take('c'));
/// pool.put_back('c');
/// assert_eq!(pool.len(), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pool {
    counts: HashMap<char, usize>,
    len: usize,
}

impl Pool {
    /// Creates a pool holding every letter of `letters`, repetitions included.
    pub fn new(letters: impl IntoWord) -> Self {
        letters.collect_word().into_iter().collect()
    }

    /// Returns how many occurrences of `letter` are left.
    #[inline]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Removes one occurrence of `letter`. Returns `false` if there is none left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    /// Adds one occurrence of `letter`.
    pub fn put_back(&mut self, letter: char) {
        *self.counts.entry(letter).or_insert(0) += 1;
        self.len += 1;
    }

    /// Returns the number of letters left, repetitions included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no letters are left.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl FromIterator<char> for Pool {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut pool = Pool::default();
        for letter in iter {
            pool.put_back(letter);
        }
        pool
    }
}

/// Per-search scratch state: the set of nodes reached so far.
///
/// A `Traversal` can be reused across searches to keep its allocation; every
/// search through [`Trie::find_words_using`] leaves it reset.
#[derive(Clone, Debug, Default)]
pub struct Traversal {
    marked: HashSet<NodeId>,
}

impl Traversal {
    /// Creates a traversal with no marks.
    pub fn new() -> Self {
        Traversal::default()
    }

    /// Marks every node below `node` whose path can be spelled from `pool`.
    ///
    /// A child is entered only if the letter on its edge is still in the pool.
    /// That letter is taken out while the child's subtree is explored and put
    /// back afterwards, so `pool` is unchanged when this returns. Marks are
    /// kept when the recursion backtracks.
    pub fn mark_reachable(&mut self, trie: &Trie, node: NodeId, pool: &mut Pool) {
        for (letter, child) in trie.node(node).children() {
            if pool.take(letter) {
                self.marked.insert(child);
                self.mark_reachable(trie, child, pool);
                pool.put_back(letter);
            }
        }
    }

    /// Returns `(word, frequency)` for every marked terminal node, in
    /// depth-first order with children visited in ascending letter order.
    ///
    /// Unmarked nodes are never descended into: marks only spread downwards,
    /// so nothing below an unmarked node can be marked.
    pub fn collect_marked(&self, trie: &Trie) -> Vec<(String, i64)> {
        let mut found = Vec::new();
        self.collect_marked_below(trie, NodeId::ROOT, &mut found);
        found
    }

    fn collect_marked_below(&self, trie: &Trie, node: NodeId, found: &mut Vec<(String, i64)>) {
        for (_, child) in trie.node(node).children() {
            if !self.is_marked(child) {
                continue;
            }
            let child_node = trie.node(child);
            if child_node.is_terminal() {
                found.push((child_node.value().to_string(), child_node.frequency()));
            }
            self.collect_marked_below(trie, child, found);
        }
    }

    /// Clears every mark.
    pub fn reset(&mut self) {
        self.marked.clear();
    }

    /// True if `node` has been reached by this traversal.
    #[inline]
    pub fn is_marked(&self, node: NodeId) -> bool {
        self.marked.contains(&node)
    }

    /// Returns the number of marked nodes.
    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }
}

impl Trie {
    /// Finds every word that can be spelled from `letters`, each letter used at
    /// most as often as it occurs.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// for word in ["a", "aa", "ab", "abc", "abb", "acc", "aab", "abd"] {
    ///     trie.insert(word);
    /// }
    /// assert_eq!(trie.find_words("abc"), ["a", "ab", "abc"]);
    /// assert_eq!(trie.find_words("cab"), ["a", "ab", "abc"]);
    /// ```
    pub fn find_words(&self, letters: impl IntoWord) -> Vec<String> {
        self.find_words_with_frequency(letters)
            .into_iter()
            .map(|(word, _)| word)
            .collect()
    }

    /// Like [`find_words`](Trie::find_words), but pairs every word with its frequency.
    pub fn find_words_with_frequency(&self, letters: impl IntoWord) -> Vec<(String, i64)> {
        self.find_words_using(letters, &mut Traversal::new())
    }

    /// Like [`find_words_with_frequency`](Trie::find_words_with_frequency), but
    /// reuses `traversal` as scratch space. `traversal` is reset before and
    /// after the search.
    pub fn find_words_using(
        &self,
        letters: impl IntoWord,
        traversal: &mut Traversal,
    ) -> Vec<(String, i64)> {
        let start = Instant::now();
        let mut pool = Pool::new(letters);
        traversal.reset();
        traversal.mark_reachable(self, NodeId::ROOT, &mut pool);
        let found = traversal.collect_marked(self);
        traversal.reset();
        log::debug!("found {} words in {:?}", found.len(), start.elapsed());
        found
    }
}
