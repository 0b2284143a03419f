//! Tests for entry key handling

use super::*;
use crate::entry::EntryOptions;
use crate::wordlist::Wordlist;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn entry() -> EntryState {
    let words = ["apple", "apply", "banana"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    EntryState::new(EntryOptions {
        words: Some(Wordlist::from_words(words)),
        ..EntryOptions::default()
    })
    .unwrap()
}

fn type_str(entry: &mut EntryState, text: &str) {
    for ch in text.chars() {
        entry.handle_key(key(KeyCode::Char(ch)));
    }
}

#[test]
fn test_typing_opens_overlay_with_matches() {
    let mut entry = entry();

    type_str(&mut entry, "app");

    assert_eq!(entry.text(), "app");
    assert!(entry.overlay.is_open());
    assert_eq!(entry.overlay.matches(), ["apple", "apply"]);
}

#[test]
fn test_typing_past_matches_closes_overlay() {
    let mut entry = entry();

    type_str(&mut entry, "appz");

    assert!(!entry.overlay.is_open());
}

#[test]
fn test_backspace_to_empty_closes_overlay() {
    let mut entry = entry();
    type_str(&mut entry, "a");
    assert!(entry.overlay.is_open());

    entry.handle_key(key(KeyCode::Backspace));

    assert_eq!(entry.text(), "");
    assert!(!entry.overlay.is_open());
}

#[test]
fn test_down_selects_first_then_cycles() {
    let mut entry = entry();
    type_str(&mut entry, "app");

    entry.handle_key(key(KeyCode::Down));
    assert_eq!(entry.overlay.selected(), Some("apple"));

    entry.handle_key(key(KeyCode::Down));
    assert_eq!(entry.overlay.selected(), Some("apply"));

    entry.handle_key(key(KeyCode::Down));
    assert_eq!(entry.overlay.selected(), Some("apple"));
}

#[test]
fn test_up_first_press_selects_first_row() {
    let mut entry = entry();
    type_str(&mut entry, "app");

    entry.handle_key(key(KeyCode::Up));

    assert_eq!(entry.overlay.selected(), Some("apple"));
}

#[test]
fn test_ctrl_n_and_ctrl_p_navigate() {
    let mut entry = entry();
    type_str(&mut entry, "app");

    entry.handle_key(key_with_mods(KeyCode::Char('n'), KeyModifiers::CONTROL));
    entry.handle_key(key_with_mods(KeyCode::Char('n'), KeyModifiers::CONTROL));
    assert_eq!(entry.overlay.selected(), Some("apply"));

    entry.handle_key(key_with_mods(KeyCode::Char('p'), KeyModifiers::CONTROL));
    assert_eq!(entry.overlay.selected(), Some("apple"));
}

#[test]
fn test_enter_commits_highlighted_suggestion() {
    let mut entry = entry();
    type_str(&mut entry, "app");
    entry.handle_key(key(KeyCode::Down));
    entry.handle_key(key(KeyCode::Down));

    let event = entry.handle_key(key(KeyCode::Enter));

    assert_eq!(event, EntryEvent::Committed("apply".to_string()));
    assert_eq!(entry.text(), "apply");
    assert!(!entry.overlay.is_open());
}

#[test]
fn test_enter_without_selection_closes_without_commit() {
    let mut entry = entry();
    type_str(&mut entry, "app");

    let event = entry.handle_key(key(KeyCode::Enter));

    assert_eq!(event, EntryEvent::Consumed);
    assert_eq!(entry.text(), "app");
    assert!(!entry.overlay.is_open());
}

#[test]
fn test_enter_with_closed_overlay_submits_text() {
    let mut entry = entry();
    type_str(&mut entry, "zebra");

    let event = entry.handle_key(key(KeyCode::Enter));

    assert_eq!(event, EntryEvent::Submitted("zebra".to_string()));
}

#[test]
fn test_escape_dismisses_overlay_without_commit() {
    let mut entry = entry();
    type_str(&mut entry, "app");
    entry.handle_key(key(KeyCode::Down));

    let event = entry.handle_key(key(KeyCode::Esc));

    assert_eq!(event, EntryEvent::Consumed);
    assert_eq!(entry.text(), "app");
    assert!(!entry.overlay.is_open());
}

#[test]
fn test_escape_with_closed_overlay_is_ignored() {
    let mut entry = entry();

    let event = entry.handle_key(key(KeyCode::Esc));

    assert_eq!(event, EntryEvent::Ignored);
}

#[test]
fn test_tab_reopens_dismissed_overlay() {
    let mut entry = entry();
    type_str(&mut entry, "app");
    entry.handle_key(key(KeyCode::Esc));
    assert!(!entry.overlay.is_open());

    let event = entry.handle_key(key(KeyCode::Tab));

    assert_eq!(event, EntryEvent::Consumed);
    assert!(entry.overlay.is_open());
    assert_eq!(entry.overlay.matches(), ["apple", "apply"]);
}

#[test]
fn test_tab_does_not_insert_a_tab_character() {
    let mut entry = entry();

    entry.handle_key(key(KeyCode::Tab));

    assert_eq!(entry.text(), "");
}

#[test]
fn test_navigation_keys_with_closed_overlay_are_consumed() {
    let mut entry = entry();

    assert_eq!(entry.handle_key(key(KeyCode::Down)), EntryEvent::Consumed);
    assert_eq!(entry.handle_key(key(KeyCode::Up)), EntryEvent::Consumed);
    assert_eq!(entry.text(), "");
}

#[test]
fn test_repopulating_overlay_resets_selection() {
    let mut entry = entry();
    type_str(&mut entry, "app");
    entry.handle_key(key(KeyCode::Down));
    assert_eq!(entry.overlay.selection(), Some(0));

    type_str(&mut entry, "l");

    assert_eq!(entry.overlay.matches(), ["apple", "apply"]);
    assert!(entry.overlay.selection().is_none());
}

#[test]
fn test_unhandled_ctrl_key_is_ignored() {
    let mut entry = entry();

    let event = entry.handle_key(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));

    assert_eq!(event, EntryEvent::Ignored);
}

#[test]
fn test_full_walkthrough_app_down_down_enter() {
    // Typing "app" over [apple, apply, banana]: Down selects apple, Down
    // selects apply, Enter commits apply and closes the overlay.
    let mut entry = entry();

    type_str(&mut entry, "app");
    assert_eq!(entry.overlay.matches(), ["apple", "apply"]);

    entry.handle_key(key(KeyCode::Down));
    assert_eq!(entry.overlay.selected(), Some("apple"));

    entry.handle_key(key(KeyCode::Down));
    assert_eq!(entry.overlay.selected(), Some("apply"));

    let event = entry.handle_key(key(KeyCode::Enter));
    assert_eq!(event, EntryEvent::Committed("apply".to_string()));
    assert_eq!(entry.text(), "apply");
    assert!(!entry.overlay.is_open());
}
