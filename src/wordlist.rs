//! Word list loading
//!
//! Reads the tab-separated suggestion source into an immutable, ordered
//! list of candidate strings.

use std::fs;
use std::path::Path;

use crate::error::WordpopError;

/// Ordered list of suggestion candidates, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// Load candidates from a tab-separated file.
    ///
    /// The first line is a header row. `column` selects a column by header
    /// name; when `None` the first column is used. Rows with an empty or
    /// missing field in that column are skipped. `ngram` joins runs of
    /// `n` consecutive words with single spaces (n=1 leaves the list
    /// unchanged).
    pub fn load(path: &Path, column: Option<&str>, ngram: usize) -> Result<Self, WordpopError> {
        if ngram == 0 {
            return Err(WordpopError::InvalidNgram);
        }

        let contents = fs::read_to_string(path).map_err(|err| WordpopError::WordlistRead {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;

        let mut lines = contents.lines().filter(|line| !line.is_empty());

        let header = lines.next().ok_or_else(|| {
            WordpopError::EmptyWordlist(path.display().to_string())
        })?;

        let column_index = match column {
            Some(name) => header
                .split('\t')
                .position(|field| field == name)
                .ok_or_else(|| WordpopError::UnknownColumn(name.to_string()))?,
            None => 0,
        };

        let words: Vec<String> = lines
            .filter_map(|line| line.split('\t').nth(column_index))
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect();

        let words = generate_ngrams(&words, ngram);

        if words.is_empty() {
            return Err(WordpopError::EmptyWordlist(path.display().to_string()));
        }

        log::debug!("loaded {} words from {}", words.len(), path.display());

        Ok(Self { words })
    }

    /// Build a word list directly from strings (used for custom sources).
    pub fn from_words(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Join each run of `n` consecutive words with single spaces.
fn generate_ngrams(words: &[String], n: usize) -> Vec<String> {
    if n == 1 {
        return words.to_vec();
    }

    words
        .windows(n)
        .map(|window| window.join(" "))
        .collect()
}

#[cfg(test)]
#[path = "wordlist_tests.rs"]
mod wordlist_tests;
