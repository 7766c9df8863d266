/// Loading tries from word lists and `word, frequency` files.
pub mod builder;
/// Compact sorted storage for a node's child edges.
pub mod children;
/// Finding the words that can be spelled from a bag of letters.
pub mod discovery;
/// Trie node and node handle types.
pub mod node;
/// Internal append-only node arena.
pub(crate) mod node_arena;
/// Writing words and frequencies back to text.
pub mod persist;
/// The trie itself: insertion, lookup, completion and frequency updates.
pub mod tree;

pub use builder::{IntoWord, LoadOptions, TrieBuilder};
pub use discovery::{Pool, Traversal};
pub use node::{NodeId, TrieNode};
pub use tree::Trie;
