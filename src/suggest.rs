//! Suggestion matching
//!
//! The matching function behind the autocomplete overlay: a pure, stable
//! filter over the word list. No ranking or scoring is applied; matches
//! keep the word list's original order.

use std::fmt;

use serde::Deserialize;

use crate::wordlist::Wordlist;

/// How a candidate is compared against the entry text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchStyle {
    /// Candidate starts with the entry text
    #[default]
    Prefix,
    /// Candidate contains the entry text anywhere
    Substring,
}

impl fmt::Display for MatchStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStyle::Prefix => write!(f, "prefix"),
            MatchStyle::Substring => write!(f, "substring"),
        }
    }
}

/// Mode flags for the list-backed matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchOptions {
    pub style: MatchStyle,
    pub ignore_case: bool,
}

/// Injected matching capability for the autocomplete entry.
///
/// Implementations must preserve the source order of their candidates and
/// return nothing for empty input (an empty entry never opens the overlay).
pub trait Suggester {
    fn suggest(&self, input: &str) -> Vec<String>;
}

/// Default suggester: filters a static word list by prefix or substring.
pub struct ListSuggester {
    words: Wordlist,
    options: MatchOptions,
}

impl fmt::Debug for ListSuggester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListSuggester")
            .field("words", &self.words.len())
            .field("options", &self.options)
            .finish()
    }
}

impl ListSuggester {
    pub fn new(words: Wordlist, options: MatchOptions) -> Self {
        Self { words, options }
    }

    fn matches(&self, input: &str, candidate: &str) -> bool {
        if self.options.ignore_case {
            let candidate = candidate.to_lowercase();
            let input = input.to_lowercase();
            match self.options.style {
                MatchStyle::Prefix => candidate.starts_with(&input),
                MatchStyle::Substring => candidate.contains(&input),
            }
        } else {
            match self.options.style {
                MatchStyle::Prefix => candidate.starts_with(input),
                MatchStyle::Substring => candidate.contains(input),
            }
        }
    }
}

impl Suggester for ListSuggester {
    fn suggest(&self, input: &str) -> Vec<String> {
        if input.is_empty() {
            return Vec::new();
        }

        self.words
            .words()
            .iter()
            .filter(|candidate| self.matches(input, candidate))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod suggest_tests;
