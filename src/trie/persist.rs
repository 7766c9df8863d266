//! Writing a trie's words and frequencies back out as `word, frequency` lines,
//! the format read by [`build_trie_from_frequency_file`](super::builder::build_trie_from_frequency_file).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::node::NodeId;
use super::tree::Trie;
use crate::error::TrieError;

/// Renders every word of `trie` as a `word, frequency` line, in depth-first order.
///
/// # Examples
///
/// ```
/// use libtrie::trie::persist::serialize;
/// use libtrie::trie::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert_with_frequency("cat", 5);
/// trie.insert("cab");
/// assert_eq!(serialize(&trie), "cab, 0\ncat, 5\n");
/// ```
pub fn serialize(trie: &Trie) -> String {
    let mut out = String::new();
    trie.visit_terminals(NodeId::ROOT, &mut |node| {
        out.push_str(node.value());
        out.push_str(", ");
        out.push_str(&node.frequency().to_string());
        out.push('\n');
    });
    out
}

/// Writes every word of `trie` as a `word, frequency` line to `writer`.
///
/// Returns the number of lines written.
pub fn write_frequencies(trie: &Trie, mut writer: impl Write) -> Result<usize, TrieError> {
    let words = trie.all_words();
    for (word, frequency) in &words {
        writeln!(writer, "{word}, {frequency}")?;
    }
    writer.flush()?;
    log::debug!("wrote {} frequency lines", words.len());
    Ok(words.len())
}

/// Saves every word of `trie` with its frequency to `path`, replacing the file.
///
/// The file is written in place; if writing fails part way through, the file
/// is left truncated.
pub fn save_frequency_file(trie: &Trie, path: impl AsRef<Path>) -> Result<usize, TrieError> {
    let file = File::create(path)?;
    write_frequencies(trie, BufWriter::new(file))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::trie::builder::{
        build_trie, build_trie_from_frequency_file, build_trie_from_frequency_text, LoadOptions,
    };

    fn sorted(mut words: Vec<(String, i64)>) -> Vec<(String, i64)> {
        words.sort();
        words
    }

    #[test]
    fn empty_trie_serializes_to_nothing() {
        assert_eq!(serialize(&Trie::new()), "");
    }

    #[test]
    fn serialize_round_trip() {
        let text = "zebra, 2\napple, 7\napp, 0\nbanana, 3\n";
        let trie = build_trie_from_frequency_text(text, LoadOptions::default()).unwrap();
        let reloaded =
            build_trie_from_frequency_text(&serialize(&trie), LoadOptions::default()).unwrap();
        assert_eq!(sorted(reloaded.all_words()), sorted(trie.all_words()));
        assert_eq!(reloaded.len(), 4);
    }

    #[test]
    fn inserted_words_round_trip() {
        let long = "y".repeat(101);
        let mut trie = Trie::new();
        for (word, frequency) in [
            ("#tag", 3),
            ("cat ", 2),
            ("a\nb", 1),
            (long.as_str(), 4),
            ("cat", -2),
            ("a,b", 7),
            (" lamb", 1),
        ] {
            trie.insert_with_frequency(word, frequency);
        }
        let reloaded = build_trie_from_frequency_text(&serialize(&trie), trie.options()).unwrap();
        assert_eq!(reloaded.all_words(), trie.all_words());
        assert_eq!(
            sorted(trie.all_words()),
            [
                (" lamb".to_string(), 1),
                ("a,b".to_string(), 7),
                ("cat".to_string(), -2)
            ]
        );
    }

    #[test]
    fn custom_options_round_trip() {
        let long = "z".repeat(150);
        let options = LoadOptions::default().with_max_length(200).with_comment(';');
        let mut trie = Trie::with_options(options);
        trie.insert_with_frequency(long.as_str(), 5);
        trie.insert_with_frequency("#tag", 3);
        let reloaded = build_trie_from_frequency_text(&serialize(&trie), trie.options()).unwrap();
        assert_eq!(reloaded.all_words(), trie.all_words());
        assert_eq!(reloaded.len(), 2);
    }

    #[test]
    fn encounters_survive_round_trip() {
        let mut trie = build_trie_from_frequency_text("cat, 5\ndog, 0\n", LoadOptions::default())
            .unwrap();
        assert!(trie.report_encounter("cat"));
        assert!(trie.report_encounter("dog"));
        assert!(!trie.report_encounter("bird"));
        let reloaded =
            build_trie_from_frequency_text(&serialize(&trie), LoadOptions::default()).unwrap();
        assert_eq!(
            reloaded.all_words(),
            [("cat".to_string(), 1), ("dog".to_string(), 1)]
        );
    }

    #[test]
    fn plain_word_list_persists_with_zero_frequency() {
        let trie = build_trie(["b", "a"], LoadOptions::default());
        assert_eq!(serialize(&trie), "a, 0\nb, 0\n");
    }

    #[test]
    fn write_frequencies_matches_serialize() {
        let mut trie = Trie::new();
        trie.insert_with_frequency("cart", 4);
        trie.insert_with_frequency("car", 9);
        let mut out = Vec::new();
        assert_eq!(write_frequencies(&trie, &mut out).unwrap(), 2);
        assert_eq!(String::from_utf8(out).unwrap(), serialize(&trie));
    }

    #[test]
    fn save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frequencies.txt");

        let mut trie = Trie::new();
        trie.insert_with_frequency("授人以渔", 3);
        trie.insert_with_frequency("cat", 5);
        trie.insert("dog");
        trie.report_encounter("dog");
        assert_eq!(save_frequency_file(&trie, &path).unwrap(), 3);

        let reloaded = build_trie_from_frequency_file(&path, LoadOptions::default()).unwrap();
        assert_eq!(sorted(reloaded.all_words()), sorted(trie.all_words()));
    }

    #[test]
    fn save_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frequencies.txt");
        std::fs::write(&path, "old, 1\nstale, 2\nlines, 3\n").unwrap();

        let mut trie = Trie::new();
        trie.insert_with_frequency("new", 1);
        save_frequency_file(&trie, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new, 1\n");
    }

    #[test]
    fn save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("frequencies.txt");
        let res = save_frequency_file(&Trie::new(), path);
        assert!(matches!(res, Err(TrieError::Io(_))));
    }
}
