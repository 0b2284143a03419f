use thiserror::Error;

/// Custom error types for wordpop
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordpopError {
    #[error("failed to read word list {path}: {reason}")]
    WordlistRead { path: String, reason: String },

    #[error("word list has no column named {0:?}")]
    UnknownColumn(String),

    #[error("word list {0} contains no words")]
    EmptyWordlist(String),

    #[error("n-gram size must be at least 1")]
    InvalidNgram,

    #[error("autocomplete entry needs a word list or a custom suggester")]
    NoSuggestionSource,

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for WordpopError {
    fn from(err: std::io::Error) -> Self {
        WordpopError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
