//! Example: solving letter jumbles with a trie.
//!
//! Builds a small dictionary, then shows lookup, completion, and the words
//! that can be spelled from a jumble of letters, shortest first. Pass a word
//! list file and a jumble to use your own:
//!
//! Run with: cargo run --example jumble [-- wordlist.txt letters]

use itertools::Itertools;
use libtrie::trie::builder::{build_trie, build_trie_from_file, LoadOptions};
use libtrie::trie::persist::serialize;
use libtrie::{Trie, TrieError};

const WORDS: [&str; 14] = [
    "# tiny demo dictionary",
    "ant", "antler", "art", "learn", "near", "neat", "rant", "rental", "tan", "tea", "tear",
    "ten", "ra",
];

fn shortest_first(words: Vec<String>) -> Vec<String> {
    words
        .into_iter()
        .sorted_by(|a, b| a.chars().count().cmp(&b.chars().count()).then_with(|| a.cmp(b)))
        .collect()
}

fn load(path: Option<String>, options: LoadOptions) -> Result<Trie, TrieError> {
    match path {
        Some(path) => build_trie_from_file(path, options),
        None => Ok(build_trie(WORDS, options)),
    }
}

fn main() -> Result<(), TrieError> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next();
    let jumble = args.next().unwrap_or_else(|| "rentla".to_string());

    let options = LoadOptions::default().with_min_length(3).with_max_length(6);
    let mut trie = load(path, options)?;
    println!("{} words loaded", trie.len());

    // Word lookup
    println!("\nWord lookup:");
    for word in ["tear", "rant", "tears", "ra"] {
        let existence = if trie.contains(word) { "exists" } else { "does not exist" };
        println!("  {word} {existence}");
    }

    // Completions
    println!("\nCompletions:");
    for prefix in ["te", "an", "x"] {
        println!("  {prefix}*: {:?}", shortest_first(trie.completions(prefix)));
    }

    // Jumble
    println!("\nWords in {jumble:?}:");
    let found = shortest_first(trie.find_words(jumble.to_lowercase()));
    for word in &found {
        println!("  {}: {word}", word.chars().count());
    }

    // Remember what was found and print the frequency file
    for word in &found {
        trie.report_encounter(word);
    }
    println!("\nFrequencies:\n{}", serialize(&trie));
    Ok(())
}
