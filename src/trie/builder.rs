use smallvec::SmallVec;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use super::tree::Trie;
use crate::error::{FrequencyLineError, TrieError};

/// Trait for types that can be used as a word when building or querying a trie.
///
/// Implemented for common string and character sequence types so that
/// [`Trie::insert`], [`Trie::contains`] and friends accept them directly.
pub trait IntoWord {
    /// Collects this word into a character buffer.
    fn collect_word(self) -> SmallVec<[char; 32]>;
}

impl IntoWord for &str {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord for &&str {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord for String {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord for &String {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord for &[char] {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.iter().copied().collect()
    }
}

impl IntoWord for Vec<char> {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.into_iter().collect()
    }
}

impl IntoWord for &Vec<char> {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.iter().copied().collect()
    }
}

impl<const N: usize> IntoWord for [char; N] {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.into_iter().collect()
    }
}

impl<const N: usize> IntoWord for &[char; N] {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.iter().copied().collect()
    }
}

/// Filters applied to every word by the loaders in this module.
///
/// Lengths are counted in characters, not bytes.
///
/// # Examples
///
/// ```
/// use libtrie::trie::builder::{build_trie, LoadOptions};
///
/// let options = LoadOptions::default().with_min_length(3).with_max_length(6);
/// let trie = build_trie(["at", "cat", "#cats", "catalogue"], options);
/// assert!(trie.contains("cat"));
/// assert!(!trie.contains("at"));
/// assert!(!trie.contains("#cats"));
/// assert!(!trie.contains("catalogue"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    /// Words shorter than this are skipped.
    pub min_length: usize,
    /// Words longer than this are skipped.
    pub max_length: usize,
    /// Lines starting with this character are comments.
    pub comment: char,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            min_length: 1,
            max_length: 100,
            comment: '#',
        }
    }
}

impl LoadOptions {
    /// Sets the minimum word length.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Sets the maximum word length.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Sets the comment marker.
    pub fn with_comment(mut self, comment: char) -> Self {
        self.comment = comment;
        self
    }

    /// Returns true if `word` is non-empty, not a comment and within the length bounds.
    ///
    /// Words ending in whitespace or containing a line break are also refused,
    /// since neither file format can carry them.
    pub fn accepts(&self, word: &str) -> bool {
        self.accepts_chars(&word.collect_word())
    }

    pub(crate) fn accepts_chars(&self, word: &[char]) -> bool {
        match (word.first(), word.last()) {
            (Some(&first), Some(&last)) => {
                first != self.comment
                    && !last.is_whitespace()
                    && !word.iter().any(|&ch| ch == '\n' || ch == '\r')
                    && word.len() >= self.min_length
                    && word.len() <= self.max_length
            }
            _ => false,
        }
    }
}

/// Builds a [`Trie`] one word at a time, applying [`LoadOptions`].
///
/// Rejected words (empty words, comments, words outside the length bounds) are
/// skipped silently and counted.
#[derive(Debug, Default)]
pub struct TrieBuilder {
    trie: Trie,
    skipped: usize,
}

impl TrieBuilder {
    /// Creates a builder for an empty trie.
    pub fn new(options: LoadOptions) -> Self {
        TrieBuilder {
            trie: Trie::with_options(options),
            skipped: 0,
        }
    }

    /// Adds a word, leaving its frequency at 0 (or unchanged if already present).
    ///
    /// Returns `true` if the word passed the filters and was inserted.
    pub fn add_word(&mut self, word: &str) -> bool {
        if !self.accept(word) {
            return false;
        }
        self.trie.insert(word);
        true
    }

    /// Adds a word and sets its frequency.
    ///
    /// Returns `true` if the word passed the filters and was inserted.
    pub fn add_word_with_frequency(&mut self, word: &str, frequency: i64) -> bool {
        if !self.accept(word) {
            return false;
        }
        self.trie.insert_with_frequency(word, frequency);
        true
    }

    /// Parses and adds one `word, frequency` line.
    ///
    /// Blank and comment lines are skipped before parsing. `line_number` is
    /// 1-based and only used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::FrequencyLine`] if the line is malformed.
    pub fn add_frequency_line(&mut self, line_number: usize, line: &str) -> Result<bool, TrieError> {
        let line = line.trim_end();
        if line.is_empty() || is_comment(line, self.trie.options().comment) {
            self.skipped += 1;
            return Ok(false);
        }
        let (word, frequency) =
            parse_frequency_line(line).map_err(|source| TrieError::FrequencyLine {
                line: line_number,
                content: line.to_string(),
                source,
            })?;
        Ok(self.add_word_with_frequency(word, frequency))
    }

    fn accept(&mut self, word: &str) -> bool {
        let accepted = self.trie.options().accepts(word);
        if !accepted {
            log::trace!("skipping {word:?}");
            self.skipped += 1;
        }
        accepted
    }

    /// Returns the number of lines or words skipped so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Finishes construction and returns the trie.
    pub fn build(self) -> Trie {
        self.trie
    }
}

/// Builds a trie from an iterator of words.
///
/// # Examples
///
/// ```
/// use libtrie::trie::builder::{build_trie, LoadOptions};
///
/// let trie = build_trie(["APPLE", "BANANA", "CHERRY"], LoadOptions::default());
/// assert!(trie.contains("BANANA"));
/// assert!(!trie.contains("APRICOT"));
/// ```
pub fn build_trie<W>(words: impl IntoIterator<Item = W>, options: LoadOptions) -> Trie
where
    W: AsRef<str>,
{
    let start = Instant::now();
    let mut builder = TrieBuilder::new(options);
    for word in words {
        builder.add_word(word.as_ref());
    }
    finish(builder, start)
}

/// Builds a trie from an iterator of `(word, frequency)` pairs.
pub fn build_trie_with_frequency<W>(
    words: impl IntoIterator<Item = (W, i64)>,
    options: LoadOptions,
) -> Trie
where
    W: AsRef<str>,
{
    let start = Instant::now();
    let mut builder = TrieBuilder::new(options);
    for (word, frequency) in words {
        builder.add_word_with_frequency(word.as_ref(), frequency);
    }
    finish(builder, start)
}

/// Builds a trie from a word list, one word per line.
///
/// Lines starting with the comment marker are ignored, as are blank lines and
/// words outside the length bounds.
pub fn build_trie_from_reader(reader: impl BufRead, options: LoadOptions) -> Result<Trie, TrieError> {
    let start = Instant::now();
    let mut builder = TrieBuilder::new(options);
    for_each_line(reader, |_, line| {
        builder.add_word(line);
        Ok(())
    })?;
    Ok(finish(builder, start))
}

/// Builds a trie from a word list file, one word per line.
///
/// # Examples
///
/// ```no_run
/// use libtrie::trie::builder::{build_trie_from_file, LoadOptions};
///
/// let trie = build_trie_from_file("wordlist.txt", LoadOptions::default()).unwrap();
/// ```
pub fn build_trie_from_file(path: impl AsRef<Path>, options: LoadOptions) -> Result<Trie, TrieError> {
    let file = File::open(path)?;
    build_trie_from_reader(BufReader::new(file), options)
}

/// Builds a trie from `word, frequency` lines.
///
/// # Errors
///
/// A single malformed line fails the whole load with [`TrieError::FrequencyLine`].
///
/// # Examples
///
/// ```
/// use libtrie::trie::builder::{build_trie_from_frequency_text, LoadOptions};
///
/// let trie = build_trie_from_frequency_text("# counts\ncat, 5\ndog, 2\n", LoadOptions::default()).unwrap();
/// assert_eq!(trie.frequency("cat"), Some(5));
/// assert!(build_trie_from_frequency_text("cat 5", LoadOptions::default()).is_err());
/// ```
pub fn build_trie_from_frequency_text(text: &str, options: LoadOptions) -> Result<Trie, TrieError> {
    let start = Instant::now();
    let mut builder = TrieBuilder::new(options);
    for (index, line) in text.lines().enumerate() {
        builder.add_frequency_line(index + 1, line)?;
    }
    Ok(finish(builder, start))
}

/// Builds a trie from a reader of `word, frequency` lines.
pub fn build_trie_from_frequency_reader(
    reader: impl BufRead,
    options: LoadOptions,
) -> Result<Trie, TrieError> {
    let start = Instant::now();
    let mut builder = TrieBuilder::new(options);
    for_each_line(reader, |line_number, line| {
        builder.add_frequency_line(line_number, line).map(|_| ())
    })?;
    Ok(finish(builder, start))
}

/// Builds a trie from a file of `word, frequency` lines, such as one written by
/// [`save_frequency_file`](super::persist::save_frequency_file).
pub fn build_trie_from_frequency_file(
    path: impl AsRef<Path>,
    options: LoadOptions,
) -> Result<Trie, TrieError> {
    let file = File::open(path)?;
    build_trie_from_frequency_reader(BufReader::new(file), options)
}

/// Splits a `word, frequency` line at its last comma.
///
/// Trailing whitespace is trimmed from the word; the frequency is trimmed and
/// parsed as a signed integer, so negative weights load as written.
pub fn parse_frequency_line(line: &str) -> Result<(&str, i64), FrequencyLineError> {
    let (word, frequency) = line
        .rsplit_once(',')
        .ok_or(FrequencyLineError::MissingSeparator)?;
    let frequency = frequency.trim().parse()?;
    Ok((word.trim_end(), frequency))
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str, marker: char) -> bool {
    line.starts_with(marker)
}

fn finish(builder: TrieBuilder, start: Instant) -> Trie {
    log::debug!("{} lines skipped", builder.skipped());
    let trie = builder.build();
    log::debug!("{} words loaded in {:?}", trie.word_count(), start.elapsed());
    trie
}

/// Feeds each line of `reader`, stripped of trailing whitespace, to `f`
/// together with its 1-based line number.
///
/// All trailing whitespace goes, not just the line ending: `"cat \n"` is `cat`.
fn for_each_line<R, F>(mut reader: R, mut f: F) -> Result<(), TrieError>
where
    R: BufRead,
    F: FnMut(usize, &str) -> Result<(), TrieError>,
{
    // Instead of using BufReader::lines() we call read_line repeatedly, which
    // allows us to reuse the same string instead of allocating one per line.
    let mut buf = String::with_capacity(80);
    let mut line_number = 0;
    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            return Ok(());
        }
        line_number += 1;
        f(line_number, buf.trim_end())?;
    }
}
