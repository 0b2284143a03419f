use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::overlay;

use super::state::App;

impl App {
    /// Render the UI: entry field on top, key hints at the bottom, and the
    /// suggestion overlay floating in between when open.
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3), // Entry field
            Constraint::Min(0),    // Space the overlay floats into
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

        let entry_area = layout[0];
        let hints_area = layout[2];

        frame.render_widget(&self.entry.textarea, entry_area);

        let hints = Paragraph::new(Line::from(
            " Tab open · ↑/↓ select · Enter accept · Esc close · Ctrl+C quit ",
        ))
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hints, hints_area);

        // Record regions for mouse hit-testing
        self.regions.entry = entry_area;
        let list_height = self.entry.list_height();
        self.regions.overlay = overlay::render_popup(
            &mut self.entry.overlay,
            frame,
            entry_area,
            list_height,
        );
    }
}
