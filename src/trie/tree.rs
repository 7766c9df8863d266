use std::time::Instant;

use mark_last::MarkLastIterator;

use super::builder::{IntoWord, LoadOptions};
use super::node::{NodeId, TrieNode};
use super::node_arena::NodeArena;

/// A prefix tree of words, each optionally carrying a frequency.
///
/// Nodes live in an internal arena and refer to their children by [`NodeId`],
/// so the tree has no back-references and can be freely moved, cloned and
/// shared between threads. Every query takes `&self`; insertion and frequency
/// updates take `&mut self`.
///
/// Tries are normally built with the loaders in [`builder`](super::builder),
/// but words can also be inserted directly. Either way every word must pass the
/// trie's [`LoadOptions`], so whatever the trie holds can be written out by
/// [`serialize`](super::persist::serialize) and loaded back unchanged.
///
/// # Examples
///
/// ```
/// use libtrie::trie::Trie;
///
/// let mut trie = Trie::new();
/// for word in ["a", "aa", "ab", "abc", "abb", "acc", "aab"] {
///     trie.insert(word);
/// }
/// assert!(trie.contains("abc"));
/// assert!(!trie.contains("abd"));
///
/// let mut completions = trie.completions("ab");
/// completions.sort();
/// assert_eq!(completions, ["ab", "abb", "abc"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Trie {
    arena: NodeArena,
    options: LoadOptions,
    word_count: u64,
    len: usize,
}

impl Trie {
    /// Creates an empty trie with the default [`LoadOptions`].
    pub fn new() -> Self {
        Trie::default()
    }

    /// Creates an empty trie that only accepts words passing `options`.
    pub fn with_options(options: LoadOptions) -> Self {
        Trie {
            options,
            ..Trie::default()
        }
    }

    /// Returns the options words are checked against on insertion.
    pub fn options(&self) -> LoadOptions {
        self.options
    }

    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &TrieNode {
        self.arena.get(NodeId::ROOT)
    }

    /// Returns the node behind a handle obtained from this trie.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not handed out by this trie.
    #[inline]
    pub fn node(&self, id: NodeId) -> &TrieNode {
        self.arena.get(id)
    }

    /// Inserts a word without touching its frequency.
    ///
    /// Returns `true` if the word was not in the trie before. Words rejected by
    /// [`LoadOptions::accepts`] are not inserted: the empty word, comments,
    /// words outside the length bounds, and words with trailing whitespace or
    /// a line break.
    ///
    /// # Panics
    ///
    /// Panics if the trie would grow past `u32::MAX` nodes.
    pub fn insert(&mut self, word: impl IntoWord) -> bool {
        let word = word.collect_word();
        self.insert_chars(&word, None)
    }

    /// Inserts a word and sets its frequency, overwriting any previous value.
    ///
    /// Returns `true` if the word was not in the trie before. Rejected words
    /// are skipped as in [`insert`](Trie::insert).
    ///
    /// # Panics
    ///
    /// Panics if the trie would grow past `u32::MAX` nodes.
    pub fn insert_with_frequency(&mut self, word: impl IntoWord, frequency: i64) -> bool {
        let word = word.collect_word();
        self.insert_chars(&word, Some(frequency))
    }

    fn insert_chars(&mut self, word: &[char], frequency: Option<i64>) -> bool {
        if !self.options.accepts_chars(word) {
            return false;
        }

        let mut current = NodeId::ROOT;
        let mut added = false;
        for (last, ch) in word.iter().copied().mark_last() {
            current = match self.arena.get(current).child_for(ch) {
                Some(child) => {
                    if last {
                        added = !self.arena.get(child).is_terminal();
                    }
                    child
                }
                None => {
                    let parent = self.arena.get(current).value();
                    let mut value = String::with_capacity(parent.len() + ch.len_utf8());
                    value.push_str(parent);
                    value.push(ch);
                    let child = self.arena.alloc(TrieNode::new(value, last));
                    self.arena.get_mut(current).set_child(ch, child);
                    added |= last;
                    child
                }
            };
        }

        let node = self.arena.get_mut(current);
        node.set_terminal();
        if let Some(frequency) = frequency {
            node.set_frequency(frequency);
        }
        self.word_count += 1;
        if added {
            self.len += 1;
        }
        added
    }

    /// Follows `prefix` from the root and returns the node it ends on.
    pub fn find(&self, prefix: impl IntoWord) -> Option<NodeId> {
        prefix
            .collect_word()
            .iter()
            .try_fold(NodeId::ROOT, |id, &ch| self.arena.get(id).child_for(ch))
    }

    /// Returns true if `word` was inserted as a complete word.
    ///
    /// Runs in O(word length).
    pub fn contains(&self, word: impl IntoWord) -> bool {
        self.find(word)
            .is_some_and(|id| self.arena.get(id).is_terminal())
    }

    /// Returns true if any word in the trie starts with `prefix`.
    pub fn has_prefix(&self, prefix: impl IntoWord) -> bool {
        self.find(prefix).is_some()
    }

    /// Returns the frequency stored for `word`, or `None` if it is not a word.
    pub fn frequency(&self, word: impl IntoWord) -> Option<i64> {
        let node = self.arena.get(self.find(word)?);
        node.is_terminal().then_some(node.frequency())
    }

    /// Finds all the words that start with `prefix`, `prefix` itself included
    /// if it is a word.
    ///
    /// Words are returned in depth-first order, children visited in ascending
    /// character order. If no word starts with `prefix` the result is empty.
    pub fn completions(&self, prefix: impl IntoWord) -> Vec<String> {
        let start = Instant::now();
        let mut completions = Vec::new();
        if let Some(id) = self.find(prefix) {
            self.visit_terminals(id, &mut |node| {
                completions.push(node.value().to_string())
            });
        }
        log::debug!(
            "found {} completions in {:?}",
            completions.len(),
            start.elapsed()
        );
        completions
    }

    /// Like [`completions`](Trie::completions), but pairs every word with its frequency.
    pub fn completions_with_frequency(&self, prefix: impl IntoWord) -> Vec<(String, i64)> {
        let mut completions = Vec::new();
        if let Some(id) = self.find(prefix) {
            self.visit_terminals(id, &mut |node| {
                completions.push((node.value().to_string(), node.frequency()))
            });
        }
        completions
    }

    /// Returns every word in the trie with its frequency, in depth-first order.
    pub fn all_words(&self) -> Vec<(String, i64)> {
        self.completions_with_frequency("")
    }

    /// Records that `word` has been encountered by setting its frequency to
    /// exactly 1, whatever it was before.
    ///
    /// Returns `false`, changing nothing, if `word` is not in the trie.
    pub fn report_encounter(&mut self, word: impl IntoWord) -> bool {
        match self.find(word) {
            Some(id) if self.arena.get(id).is_terminal() => {
                self.arena.get_mut(id).set_frequency(1);
                true
            }
            _ => false,
        }
    }

    /// Calls `visit` on every terminal node of the subtree rooted at `id`.
    pub(crate) fn visit_terminals<F>(&self, id: NodeId, visit: &mut F)
    where
        F: FnMut(&TrieNode),
    {
        let node = self.arena.get(id);
        if node.is_terminal() {
            visit(node);
        }
        for (_, child) in node.children() {
            self.visit_terminals(child, visit);
        }
    }

    /// Returns the number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of insertions performed, duplicates included.
    pub fn word_count(&self) -> u64 {
        self.word_count
    }

    /// Returns the number of nodes in the trie, root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    fn trie_of(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(*word);
        }
        trie
    }

    fn sorted(mut words: Vec<String>) -> Vec<String> {
        words.sort();
        words
    }

    #[test]
    fn empty_trie() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert!(!trie.contains("a"));
        assert!(!trie.contains(""));
        assert!(trie.completions("a").is_empty());
        assert!(trie.all_words().is_empty());
    }

    #[test]
    fn contains_inserted_words() {
        let words = ["TEST", "TESTER", "WTEST"];
        let trie = trie_of(&words);
        for word in words {
            assert!(trie.contains(word), "{word}");
        }
        assert!(!trie.contains("TES"));
        assert!(!trie.contains("TESTS"));
        assert!(!trie.contains("WTES"));
        assert!(!trie.contains(""));
        assert!(trie.has_prefix("TES"));
        assert!(!trie.has_prefix("TESTS"));
    }

    #[test]
    fn node_values_spell_their_path() {
        let trie = trie_of(&["TEST", "TESTER"]);
        let mut id = NodeId::ROOT;
        let mut expected = String::new();
        for ch in "TESTER".chars() {
            id = trie.node(id).child_for(ch).unwrap();
            expected.push(ch);
            assert_eq!(trie.node(id).value(), expected);
        }
        assert!(trie.node(trie.find("TEST").unwrap()).is_terminal());
        assert!(!trie.node(trie.find("TESTE").unwrap()).is_terminal());
    }

    #[test]
    fn shared_prefixes_share_nodes() {
        let trie = trie_of(&["ABCDEF"]);
        assert_eq!(trie.node_count(), "ABCDEF".len() + 1);

        let trie = trie_of(&["ABCDEF", "ABC", "AB"]);
        assert_eq!(trie.node_count(), "ABCDEF".len() + 1);
    }

    #[test]
    fn insert_prefix_of_existing() {
        let mut trie = trie_of(&["abc"]);
        assert!(!trie.contains("ab"));
        assert!(trie.insert("ab"));
        assert!(trie.contains("ab"));
        assert!(trie.contains("abc"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn duplicate_insert_is_idempotent() {
        let mut trie = Trie::new();
        assert!(trie.insert("cat"));
        let nodes = trie.node_count();
        assert!(!trie.insert("cat"));
        assert_eq!(trie.node_count(), nodes);
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.word_count(), 2);
    }

    #[test]
    fn empty_word_is_ignored() {
        let mut trie = Trie::new();
        assert!(!trie.insert(""));
        assert!(!trie.root().is_terminal());
        assert_eq!(trie.word_count(), 0);
    }

    #[test]
    fn insert_refuses_words_options_reject() {
        let long = "x".repeat(101);
        let mut trie = Trie::new();
        assert!(!trie.insert("#tag"));
        assert!(!trie.insert("cat "));
        assert!(!trie.insert("a\nb"));
        assert!(!trie.insert_with_frequency(long.as_str(), 4));
        assert!(trie.is_empty());
        assert_eq!(trie.word_count(), 0);
        assert_eq!(trie.node_count(), 1);

        let options = LoadOptions::default().with_max_length(200).with_comment(';');
        let mut trie = Trie::with_options(options);
        assert_eq!(trie.options(), options);
        assert!(trie.insert("#tag"));
        assert!(trie.insert(long.as_str()));
        assert!(!trie.insert(";note"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn frequency_is_overwritten_only_when_supplied() {
        let mut trie = Trie::new();
        trie.insert_with_frequency("cat", 5);
        assert_eq!(trie.frequency("cat"), Some(5));
        trie.insert("cat");
        assert_eq!(trie.frequency("cat"), Some(5));
        trie.insert_with_frequency("cat", 9);
        assert_eq!(trie.frequency("cat"), Some(9));
        trie.insert_with_frequency("cat", -3);
        assert_eq!(trie.frequency("cat"), Some(-3));
        assert_eq!(trie.frequency("ca"), None);
        assert_eq!(trie.frequency("dog"), None);
    }

    #[test]
    fn completions_of_prefix() {
        let trie = trie_of(&["a", "aa", "ab", "abc", "abb", "acc", "aab"]);
        assert_eq!(sorted(trie.completions("ab")), ["ab", "abb", "abc"]);
        assert_eq!(sorted(trie.completions("aa")), ["aa", "aab"]);
        assert_eq!(trie.completions("acc"), ["acc"]);
    }

    #[test]
    fn completions_are_depth_first_in_letter_order() {
        let trie = trie_of(&["b", "abc", "a", "ab", "ba"]);
        assert_eq!(trie.completions(""), ["a", "ab", "abc", "b", "ba"]);
    }

    #[test]
    fn completions_of_unknown_prefix_are_empty() {
        let trie = trie_of(&["a", "aa", "ab"]);
        assert!(trie.completions("b").is_empty());
        assert!(trie.completions("abc").is_empty());
    }

    #[test]
    fn completions_of_non_word_prefix_exclude_prefix() {
        let trie = trie_of(&["abc", "abd"]);
        assert_eq!(trie.completions("ab"), ["abc", "abd"]);
    }

    #[test]
    fn completions_with_frequency() {
        let mut trie = Trie::new();
        trie.insert_with_frequency("car", 3);
        trie.insert_with_frequency("cart", 1);
        trie.insert("cab");
        assert_eq!(
            trie.completions_with_frequency("ca"),
            [
                ("cab".to_string(), 0),
                ("car".to_string(), 3),
                ("cart".to_string(), 1)
            ]
        );
    }

    #[test]
    fn insertion_order_does_not_change_contents() {
        let words = ["ab", "abc", "b", "ba", "bab"];
        let expected = trie_of(&words).all_words();
        for order in words.iter().copied().permutations(words.len()) {
            let trie = trie_of(&order);
            assert_eq!(trie.all_words(), expected);
            assert_eq!(trie.node_count(), 7);
        }
    }

    #[test]
    fn report_encounter_sets_frequency_to_one() {
        let mut trie = Trie::new();
        trie.insert_with_frequency("cat", 5);
        trie.insert("dog");
        assert!(trie.report_encounter("cat"));
        assert!(trie.report_encounter("dog"));
        assert!(trie.report_encounter("dog"));
        assert_eq!(trie.frequency("cat"), Some(1));
        assert_eq!(trie.frequency("dog"), Some(1));
    }

    #[test]
    fn report_encounter_of_unknown_word_is_noop() {
        let mut trie = Trie::new();
        trie.insert_with_frequency("cats", 5);
        let before = trie.all_words();
        assert!(!trie.report_encounter("cat"));
        assert!(!trie.report_encounter("catsup"));
        assert!(!trie.report_encounter(""));
        assert_eq!(trie.all_words(), before);
        assert_eq!(trie.node(trie.find("cat").unwrap()).frequency(), 0);
    }

    #[test]
    fn unicode_words() {
        let trie = trie_of(&["授人以渔", "授人以鱼不如授人以渔"]);
        assert!(trie.contains("授人以渔"));
        assert!(!trie.contains("授人以"));
        assert_eq!(trie.completions("授人以").len(), 2);
    }

    #[test]
    fn char_slices_are_words() {
        let mut trie = Trie::new();
        trie.insert(vec!['h', 'i']);
        assert!(trie.contains(['h', 'i']));
        assert!(trie.contains(&['h', 'i'][..]));
        assert!(trie.contains(String::from("hi")));
    }

    #[test]
    fn trie_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Trie>();
    }
}
