use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::error::WordpopError;
use crate::overlay::OverlayState;
use crate::suggest::{ListSuggester, MatchOptions, Suggester};
use crate::wordlist::Wordlist;

pub const DEFAULT_LIST_HEIGHT: u16 = 7;

/// Construction options for the entry control.
///
/// Either a word list or a custom suggester must be supplied; a custom
/// suggester wins when both are present.
pub struct EntryOptions {
    pub words: Option<Wordlist>,
    pub suggester: Option<Box<dyn Suggester>>,
    pub match_options: MatchOptions,
    pub list_height: u16,
}

impl Default for EntryOptions {
    fn default() -> Self {
        Self {
            words: None,
            suggester: None,
            match_options: MatchOptions::default(),
            list_height: DEFAULT_LIST_HEIGHT,
        }
    }
}

/// State of the autocomplete entry control
pub struct EntryState {
    pub textarea: TextArea<'static>,
    pub overlay: OverlayState,
    suggester: Box<dyn Suggester>,
    list_height: u16,
}

impl std::fmt::Debug for EntryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryState")
            .field("textarea", &self.textarea)
            .field("overlay", &self.overlay)
            .field("suggester", &"<dyn Suggester>")
            .field("list_height", &self.list_height)
            .finish()
    }
}

impl EntryState {
    pub fn new(options: EntryOptions) -> Result<Self, WordpopError> {
        let suggester: Box<dyn Suggester> = match (options.suggester, options.words) {
            (Some(suggester), _) => suggester,
            (None, Some(words)) => Box::new(ListSuggester::new(words, options.match_options)),
            (None, None) => return Err(WordpopError::NoSuggestionSource),
        };

        let mut textarea = TextArea::default();
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Word ")
                .border_style(Style::default().fg(Color::Cyan)),
        );
        textarea.set_cursor_line_style(Style::default());

        Ok(Self {
            textarea,
            overlay: OverlayState::new(),
            suggester,
            list_height: options.list_height,
        })
    }

    /// Current entry text
    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_str()
    }

    pub fn list_height(&self) -> u16 {
        self.list_height
    }

    /// Re-filter the suggestion source after a text change. Empty text
    /// always closes the overlay; it never means "match everything".
    pub fn refresh_matches(&mut self) {
        let text = self.text();
        if text.is_empty() {
            self.overlay.close();
            return;
        }

        let matches = self.suggester.suggest(text);
        log::debug!("{} matches for {text:?}", matches.len());
        self.overlay.update(matches);
    }

    /// Open the overlay for the current text (Tab). No-op when the overlay
    /// is already open or the text is empty or matches nothing.
    pub fn force_open(&mut self) {
        if self.overlay.is_open() {
            return;
        }

        let text = self.text();
        if text.is_empty() {
            return;
        }

        let matches = self.suggester.suggest(text);
        self.overlay.update(matches);
    }

    /// Dismiss the overlay without committing.
    pub fn dismiss(&mut self) {
        self.overlay.close();
    }

    /// Commit the highlighted suggestion into the entry and close the
    /// overlay. With no highlight the overlay still closes but the text is
    /// left alone.
    pub fn commit(&mut self) -> Option<String> {
        let selected = self.overlay.selected().map(str::to_string);
        if let Some(text) = &selected {
            self.set_text(text);
        }
        self.overlay.close();
        selected
    }

    /// Commit a specific row (mouse selection).
    pub fn commit_row(&mut self, index: usize) -> Option<String> {
        self.overlay.select(index);
        if self.overlay.selection() != Some(index) {
            return None;
        }
        self.commit()
    }

    /// Replace the entry text without re-filtering; committing a value must
    /// not reopen the overlay.
    pub fn set_text(&mut self, text: &str) {
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(text);
    }
}

#[cfg(test)]
#[path = "entry_state_tests.rs"]
mod entry_state_tests;
