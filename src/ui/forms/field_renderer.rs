//! Field rendering utilities for forms

use crate::platform::REVEAL_SHORTCUT;
use crate::state::{FieldName, InputKind};
use crate::validation::ValidationError;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field (top border + value + bottom border)
pub const FIELD_HEIGHT: u16 = 3;

/// Character used to mask the password
const MASK_CHAR: char = '•';

/// What to draw for a single field
pub struct FieldView<'a> {
    pub field: FieldName,
    /// Raw value, or the option label for selects
    pub value: &'a str,
    pub is_active: bool,
    pub error: Option<&'a ValidationError>,
    pub password_visible: bool,
}

/// Text shown inside the field box
pub fn display_value(view: &FieldView) -> String {
    match view.field.kind() {
        InputKind::Password if !view.password_visible => {
            std::iter::repeat(MASK_CHAR)
                .take(view.value.chars().count())
                .collect()
        }
        _ => view.value.to_string(),
    }
}

/// Draw a form field with its label, required marker, and inline error
pub fn draw_field(frame: &mut Frame, area: Rect, view: &FieldView) {
    let border_color = if view.error.is_some() {
        Color::Red
    } else if view.is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let value = display_value(view);
    let cursor = if view.is_active { "▌" } else { "" };

    let mut spans = Vec::new();
    if value.is_empty() && !view.is_active {
        spans.push(Span::styled(
            view.field.placeholder(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        let style = if view.is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(value, style));
        spans.push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
    }

    match view.field.kind() {
        InputKind::Select => {
            spans.insert(0, Span::styled("◂ ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(" ▸", Style::default().fg(Color::DarkGray)));
        }
        InputKind::Password if view.is_active => {
            let action = if view.password_visible { "hide" } else { "show" };
            let hint = format!("  ({REVEAL_SHORTCUT} {action})");
            spans.push(Span::styled(hint, Style::default().fg(Color::DarkGray)));
        }
        _ => {}
    }

    let title = Line::from(vec![
        Span::raw(format!(" {}", view.field.label())),
        Span::styled("*", Style::default().fg(Color::Red)),
        Span::raw(" "),
    ]);

    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if let Some(err) = view.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {err} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(field: FieldName, value: &str, password_visible: bool) -> FieldView<'_> {
        FieldView {
            field,
            value,
            is_active: false,
            error: None,
            password_visible,
        }
    }

    #[test]
    fn test_password_masked_by_default() {
        let v = view(FieldName::Password, "Abc1", false);
        assert_eq!(display_value(&v), "••••");
    }

    #[test]
    fn test_password_revealed() {
        let v = view(FieldName::Password, "Abc1", true);
        assert_eq!(display_value(&v), "Abc1");
    }

    #[test]
    fn test_other_fields_unmasked() {
        let v = view(FieldName::Email, "a@b.c", false);
        assert_eq!(display_value(&v), "a@b.c");
    }
}
