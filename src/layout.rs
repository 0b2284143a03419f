//! Region tracking for position-aware mouse interactions
//!
//! Records where UI components were rendered so mouse events can be routed
//! to the component under the cursor. The overlay floats over the frame, so
//! it is checked before the entry field.

use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Entry,
    Overlay,
}

/// Regions recorded during the last render
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutRegions {
    pub entry: Rect,
    pub overlay: Option<Rect>,
}

impl LayoutRegions {
    pub fn region_at(&self, column: u16, row: u16) -> Option<Region> {
        let position = Position::new(column, row);

        if let Some(overlay) = self.overlay {
            if overlay.contains(position) {
                return Some(Region::Overlay);
            }
        }

        if self.entry.contains(position) {
            return Some(Region::Entry);
        }

        None
    }
}
