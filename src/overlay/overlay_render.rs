//! Suggestion popup rendering
//!
//! Renders the overlay as a list anchored directly below the entry field,
//! with a scrollbar that appears only when the matches overflow the
//! visible window.

use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use unicode_width::UnicodeWidthStr;

use crate::widgets::popup;

use super::OverlayState;

const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 1;
const MAX_POPUP_WIDTH: usize = 60;
const SELECTION_MARKER: &str = "► ";

/// Render the suggestion popup below the entry field.
///
/// Returns the popup area for mouse hit-testing, or `None` when nothing
/// was drawn.
pub fn render_popup(
    overlay: &mut OverlayState,
    frame: &mut Frame,
    anchor: Rect,
    list_height: u16,
) -> Option<Rect> {
    if !overlay.is_open() {
        return None;
    }

    let total = overlay.matches().len();
    let visible_count = total.min(list_height as usize);
    let popup_height = (visible_count as u16) + POPUP_BORDER_HEIGHT;

    let max_text_width = overlay
        .matches()
        .iter()
        .map(|text| text.width() + SELECTION_MARKER.width())
        .max()
        .unwrap_or(20)
        .min(MAX_POPUP_WIDTH);
    let popup_width = (max_text_width as u16) + POPUP_PADDING;

    let popup_area =
        popup::popup_below_anchor(frame.area(), anchor, popup_width, popup_height, POPUP_OFFSET_X);

    // Not enough room below the entry to show any rows
    let visible_rows = popup_area.height.saturating_sub(POPUP_BORDER_HEIGHT) as usize;
    if visible_rows == 0 || popup_area.width < 3 {
        return None;
    }

    overlay.ensure_selection_visible(visible_rows);
    let offset = overlay.offset();
    let selection = overlay.selection();

    let items: Vec<ListItem> = overlay
        .matches()
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows)
        .map(|(index, text)| {
            let line = if selection == Some(index) {
                Line::from(Span::styled(
                    format!("{SELECTION_MARKER}{text}"),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {text}"),
                    Style::default().fg(Color::White).bg(Color::Black),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list, popup_area);

    // Scrollbar only when matches overflow the window
    if total > visible_rows {
        let mut scrollbar_state = ScrollbarState::new(total).position(offset);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            popup_area.inner(Margin {
                horizontal: 0,
                vertical: 1,
            }),
            &mut scrollbar_state,
        );
    }

    Some(popup_area)
}

/// Map a mouse position inside the popup to a match index.
pub fn row_at(popup_area: Rect, offset: usize, column: u16, row: u16) -> Option<usize> {
    let inner = popup_area.inner(Margin {
        horizontal: 1,
        vertical: 1,
    });

    if column < inner.x || column >= inner.right() || row < inner.y || row >= inner.bottom() {
        return None;
    }

    Some(offset + (row - inner.y) as usize)
}

#[cfg(test)]
#[path = "overlay_render_tests.rs"]
mod overlay_render_tests;
