//! Layout components (form card, status bar)

use super::components::centered_rect;
use crate::app::App;
use crate::platform::{QUIT_SHORTCUT, REVEAL_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::FieldName;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the form card
pub const CARD_WIDTH: u16 = 64;

/// Split the screen into the centered form card and the status bar
pub fn create_layout(area: Rect, card_height: u16) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let card = centered_rect(chunks[0], CARD_WIDTH, card_height);
    (card, chunks[1])
}

/// Key hints for the current focus
fn key_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.state.submission.is_visible() {
        return vec![("Enter/Esc", "close")];
    }

    let mut hints = vec![("Tab", "next field")];
    if app.state.form.is_submit_active() {
        hints.push(("Enter", "register"));
    } else if app.state.form.active_field_name() == Some(FieldName::Country) {
        hints.push(("←→", "choose"));
    }
    hints.push((SUBMIT_SHORTCUT, "submit"));
    hints.push((REVEAL_SHORTCUT, "show password"));
    hints.push((QUIT_SHORTCUT, "quit"));
    hints
}

/// Draw the status bar at the bottom of the screen
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();

    if let Some(ref status) = app.state.status_message {
        spans.push(Span::styled(
            format!(" {} ", status.text),
            Style::default().fg(Color::Black).bg(Color::Green),
        ));
        spans.push(Span::raw(" "));
    }

    for (key, action) in key_hints(app) {
        spans.push(Span::styled(key, Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!(": {action}  "),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
