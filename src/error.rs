use std::num::ParseIntError;

/// Errors that can occur while loading or persisting a trie.
#[derive(Debug, thiserror::Error)]
pub enum TrieError {
    /// Reading a word list or writing a frequency file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A line of a frequency file could not be parsed. The whole load is abandoned.
    #[error("malformed frequency line {line}: {content:?}")]
    FrequencyLine {
        /// 1-based line number in the input.
        line: usize,
        /// The offending line, without its line terminator.
        content: String,
        /// What was wrong with the line.
        #[source]
        source: FrequencyLineError,
    },
}

/// Why a single `word, frequency` line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrequencyLineError {
    /// No comma separates the word from its frequency.
    #[error("missing ',' between word and frequency")]
    MissingSeparator,

    /// The frequency field is not an integer.
    #[error("invalid frequency: {0}")]
    InvalidFrequency(#[from] ParseIntError),
}
