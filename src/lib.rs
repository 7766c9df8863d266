//! # libtrie
//!
//! A prefix-tree ("trie") dictionary for Rust, with exact lookup, prefix
//! completion, and discovery of every word that can be spelled from a bag of
//! letters, as needed by anagram and word-game solvers.
//!
//! Each word can carry a frequency. Frequencies are loaded from and saved to a
//! simple `word, frequency` text format, and [`Trie::report_encounter`](trie::Trie::report_encounter)
//! flags a word as seen.
//!
//! ## Quick Start
//!
//! ```
//! use libtrie::trie::builder::{build_trie, LoadOptions};
//!
//! let trie = build_trie(["a", "aa", "ab", "abc", "abb", "acc", "aab", "abd"], LoadOptions::default());
//!
//! assert!(trie.contains("abc"));
//! assert!(!trie.contains("ac"));
//! assert_eq!(trie.completions("ab"), ["ab", "abb", "abc", "abd"]);
//! assert_eq!(trie.find_words("cab"), ["a", "ab", "abc"]);
//! ```
//!
//! ## Word lists
//!
//! Word lists are UTF-8 text with one word per line, starting in the first
//! column. Lines starting with `#` are comments. Words shorter or longer than
//! the bounds in [`LoadOptions`](trie::LoadOptions) are skipped:
//!
//! ```no_run
//! use libtrie::trie::builder::{build_trie_from_file, LoadOptions};
//!
//! let options = LoadOptions::default().with_min_length(3).with_max_length(6);
//! let trie = build_trie_from_file("wordlist.txt", options).unwrap();
//! let mut words = trie.find_words("retain");
//! words.sort_by(|a, b| a.len().cmp(&b.len()).then(a.cmp(b)));
//! ```
//!
//! ## Frequencies
//!
//! ```
//! use libtrie::trie::builder::{build_trie_from_frequency_text, LoadOptions};
//! use libtrie::trie::persist::serialize;
//!
//! let mut trie = build_trie_from_frequency_text("cat, 5\ndog, 2\n", LoadOptions::default()).unwrap();
//! trie.report_encounter("cat");
//! assert_eq!(serialize(&trie), "cat, 1\ndog, 2\n");
//! ```

#![warn(missing_docs)]

/// Error types for loading and saving tries.
pub mod error;
/// Core trie data structure: nodes, loaders, queries and persistence.
pub mod trie;

pub use error::{FrequencyLineError, TrieError};
pub use trie::{LoadOptions, Trie};
