//! Tests for the suggestion matcher

use super::*;
use proptest::prelude::*;

fn suggester(words: &[&str], style: MatchStyle, ignore_case: bool) -> ListSuggester {
    let list = Wordlist::from_words(words.iter().map(|s| s.to_string()).collect());
    ListSuggester::new(list, MatchOptions { style, ignore_case })
}

#[test]
fn test_prefix_match_preserves_order() {
    let s = suggester(&["apple", "banana", "apply"], MatchStyle::Prefix, false);

    assert_eq!(s.suggest("app"), ["apple", "apply"]);
}

#[test]
fn test_prefix_match_is_case_sensitive_by_default() {
    let s = suggester(&["Apple", "apple"], MatchStyle::Prefix, false);

    assert_eq!(s.suggest("app"), ["apple"]);
}

#[test]
fn test_prefix_match_ignore_case() {
    let s = suggester(&["Apple", "apple", "APPLY"], MatchStyle::Prefix, true);

    assert_eq!(s.suggest("app"), ["Apple", "apple", "APPLY"]);
}

#[test]
fn test_substring_match() {
    let s = suggester(&["grape", "apex", "pear"], MatchStyle::Substring, false);

    assert_eq!(s.suggest("pe"), ["grape", "apex", "pear"]);
}

#[test]
fn test_substring_match_ignore_case() {
    let s = suggester(&["grAPE", "pear"], MatchStyle::Substring, true);

    assert_eq!(s.suggest("APE"), ["grAPE"]);
}

#[test]
fn test_empty_input_yields_no_matches() {
    let s = suggester(&["apple"], MatchStyle::Prefix, false);

    assert!(s.suggest("").is_empty());

    let s = suggester(&["apple"], MatchStyle::Substring, true);
    assert!(s.suggest("").is_empty());
}

#[test]
fn test_no_matches_is_normal() {
    let s = suggester(&["apple", "banana"], MatchStyle::Prefix, false);

    assert!(s.suggest("zebra").is_empty());
}

#[test]
fn test_regex_metacharacters_are_literal() {
    let s = suggester(&["a.b", "axb", "a(b"], MatchStyle::Substring, false);

    assert_eq!(s.suggest("a.b"), ["a.b"]);
    assert_eq!(s.suggest("a(b"), ["a(b"]);
}

#[test]
fn test_match_style_display() {
    assert_eq!(MatchStyle::Prefix.to_string(), "prefix");
    assert_eq!(MatchStyle::Substring.to_string(), "substring");
}

proptest! {
    // Filtering is idempotent: filtering the filtered result by the same
    // input yields the same result.
    #[test]
    fn prop_filter_is_idempotent(
        words in prop::collection::vec("[a-zA-Z]{0,8}", 0..40),
        input in "[a-zA-Z]{0,4}",
        substring in prop::bool::ANY,
        ignore_case in prop::bool::ANY,
    ) {
        let style = if substring { MatchStyle::Substring } else { MatchStyle::Prefix };
        let options = MatchOptions { style, ignore_case };

        let first = ListSuggester::new(Wordlist::from_words(words), options);
        let once = first.suggest(&input);

        let second = ListSuggester::new(Wordlist::from_words(once.clone()), options);
        let twice = second.suggest(&input);

        prop_assert_eq!(once, twice);
    }

    // Every match actually contains/starts with the input.
    #[test]
    fn prop_matches_satisfy_predicate(
        words in prop::collection::vec("[a-z]{0,8}", 0..40),
        input in "[a-z]{1,4}",
        substring in prop::bool::ANY,
    ) {
        let style = if substring { MatchStyle::Substring } else { MatchStyle::Prefix };
        let options = MatchOptions { style, ignore_case: false };
        let s = ListSuggester::new(Wordlist::from_words(words), options);

        for candidate in s.suggest(&input) {
            match style {
                MatchStyle::Prefix => prop_assert!(candidate.starts_with(&input)),
                MatchStyle::Substring => prop_assert!(candidate.contains(&input)),
            }
        }
    }
}
