/// Overlay lifecycle state
///
/// The overlay is `Open` iff the last filter produced matches and the user
/// has neither dismissed it (Escape) nor committed a value (Enter/click).
/// `selection` starts empty each time the match list is repopulated;
/// `offset` is the first visible row, kept in sync with the selection
/// during rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open {
        matches: Vec<String>,
        selection: Option<usize>,
        offset: usize,
    },
}

impl OverlayState {
    pub fn new() -> Self {
        Self::Closed
    }

    /// Replace the match list. Empty matches close the overlay; anything
    /// else (re)opens it with no selection.
    pub fn update(&mut self, matches: Vec<String>) {
        *self = if matches.is_empty() {
            Self::Closed
        } else {
            Self::Open {
                matches,
                selection: None,
                offset: 0,
            }
        };
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn matches(&self) -> &[String] {
        match self {
            Self::Closed => &[],
            Self::Open { matches, .. } => matches,
        }
    }

    pub fn selection(&self) -> Option<usize> {
        match self {
            Self::Closed => None,
            Self::Open { selection, .. } => *selection,
        }
    }

    /// The highlighted match, if any.
    pub fn selected(&self) -> Option<&str> {
        match self {
            Self::Closed => None,
            Self::Open { matches, selection, .. } => {
                selection.map(|index| matches[index].as_str())
            }
        }
    }

    pub fn offset(&self) -> usize {
        match self {
            Self::Closed => 0,
            Self::Open { offset, .. } => *offset,
        }
    }

    /// Move the highlight down, wrapping from the last row to the first.
    /// The first press selects row 0.
    pub fn select_next(&mut self) {
        if let Self::Open { matches, selection, .. } = self {
            *selection = match *selection {
                None => Some(0),
                Some(index) if index + 1 == matches.len() => Some(0),
                Some(index) => Some(index + 1),
            };
        }
    }

    /// Move the highlight up, wrapping from the first row to the last.
    ///
    /// The first press selects row 0, same as `select_next`. The original
    /// widget behaves this way; kept for parity.
    pub fn select_previous(&mut self) {
        if let Self::Open { matches, selection, .. } = self {
            *selection = match *selection {
                None => Some(0),
                Some(0) => Some(matches.len() - 1),
                Some(index) => Some(index - 1),
            };
        }
    }

    /// Set the highlight directly (mouse selection). Out-of-range rows are
    /// ignored.
    pub fn select(&mut self, index: usize) {
        if let Self::Open { matches, selection, .. } = self {
            if index < matches.len() {
                *selection = Some(index);
            }
        }
    }

    /// Scroll so the highlighted row is inside the visible window.
    pub fn ensure_selection_visible(&mut self, visible_rows: usize) {
        if let Self::Open { selection, offset, .. } = self {
            let Some(selected) = *selection else { return };
            if visible_rows == 0 {
                return;
            }

            if selected < *offset {
                *offset = selected;
            } else if selected >= *offset + visible_rows {
                *offset = selected + 1 - visible_rows;
            }
        }
    }
}

#[cfg(test)]
#[path = "overlay_state_tests.rs"]
mod overlay_state_tests;
