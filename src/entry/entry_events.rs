use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::entry_state::EntryState;

/// Outcome of a key press handled by the entry control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryEvent {
    /// Key consumed by the widget
    Consumed,
    /// Key not handled; the host application decides what to do
    Ignored,
    /// A suggestion was committed into the entry
    Committed(String),
    /// Enter pressed while the overlay was closed
    Submitted(String),
}

impl EntryState {
    /// Handle a key press.
    ///
    /// Navigation, commit and dismiss keys are intercepted here; everything
    /// else is fed to the underlying textarea, re-filtering the suggestion
    /// source whenever the text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> EntryEvent {
        // Ctrl-n / Ctrl-p mirror Down / Up
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('n') => {
                    self.overlay.select_next();
                    return EntryEvent::Consumed;
                }
                KeyCode::Char('p') => {
                    self.overlay.select_previous();
                    return EntryEvent::Consumed;
                }
                _ => return EntryEvent::Ignored,
            }
        }

        match key.code {
            KeyCode::Down => {
                self.overlay.select_next();
                EntryEvent::Consumed
            }
            KeyCode::Up => {
                self.overlay.select_previous();
                EntryEvent::Consumed
            }
            KeyCode::Tab => {
                self.force_open();
                EntryEvent::Consumed
            }
            KeyCode::Esc => {
                if self.overlay.is_open() {
                    self.dismiss();
                    EntryEvent::Consumed
                } else {
                    EntryEvent::Ignored
                }
            }
            KeyCode::Enter => {
                if self.overlay.is_open() {
                    match self.commit() {
                        Some(text) => EntryEvent::Committed(text),
                        None => EntryEvent::Consumed,
                    }
                } else {
                    EntryEvent::Submitted(self.text().to_string())
                }
            }
            _ => {
                if self.textarea.input(key) {
                    self.refresh_matches();
                }
                EntryEvent::Consumed
            }
        }
    }
}

#[cfg(test)]
#[path = "entry_events_tests.rs"]
mod entry_events_tests;
