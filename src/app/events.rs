use std::io;

use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::entry::EntryEvent;
use crate::layout::Region;
use crate::overlay;

use super::state::App;

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Mouse(mouse_event) => {
                self.handle_mouse_event(mouse_event);
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.entry.handle_key(key) {
            EntryEvent::Submitted(text) => {
                // Enter on an empty entry does nothing
                if !text.is_empty() {
                    self.committed = Some(text);
                    self.should_quit = true;
                }
            }
            EntryEvent::Ignored => {
                // Escape with the overlay closed exits without output
                if key.code == KeyCode::Esc {
                    self.should_quit = true;
                }
            }
            EntryEvent::Committed(_) | EntryEvent::Consumed => {}
        }
    }

    /// Handle global keys regardless of entry state
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C / Ctrl+Q: Exit without output
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.should_quit = true;
            return true;
        }

        false
    }

    /// Handle mouse events: releasing the left button over an overlay row
    /// commits that suggestion.
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Up(MouseButton::Left) {
            return;
        }

        if self.regions.region_at(mouse.column, mouse.row) != Some(Region::Overlay) {
            return;
        }

        let Some(popup_area) = self.regions.overlay else {
            return;
        };

        let offset = self.entry.overlay.offset();
        if let Some(row) = overlay::row_at(popup_area, offset, mouse.column, mouse.row) {
            self.entry.commit_row(row);
        }
    }
}
