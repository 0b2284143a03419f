use crate::entry::EntryState;
use crate::layout::LayoutRegions;

/// Application state
pub struct App {
    pub entry: EntryState,
    pub regions: LayoutRegions,
    pub committed: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance around a configured entry control
    pub fn new(entry: EntryState) -> Self {
        Self {
            entry,
            regions: LayoutRegions::default(),
            committed: None,
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The value accepted with Enter, if any
    pub fn committed(&self) -> Option<&str> {
        self.committed.as_deref()
    }
}
