//! Error summary box listing every invalid field

use crate::validation::ErrorMap;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows needed to draw the summary, 0 when there is nothing to show
pub fn summary_height(errors: &ErrorMap) -> u16 {
    if errors.is_empty() {
        0
    } else {
        errors.len() as u16 + 2 // + borders
    }
}

/// One line per error, `field: message`, in field order
pub fn summary_lines(errors: &ErrorMap) -> Vec<Line<'static>> {
    errors
        .iter()
        .map(|(field, err)| {
            Line::from(vec![
                Span::styled(
                    format!("{}: ", field.key()),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(err.to_string(), Style::default().fg(Color::White)),
            ])
        })
        .collect()
}

pub fn draw_error_summary(frame: &mut Frame, area: Rect, errors: &ErrorMap) {
    if errors.is_empty() || area.height == 0 {
        return;
    }

    let block = Block::default()
        .title(" ⚠ Please fix the following ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    frame.render_widget(Paragraph::new(summary_lines(errors)).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldName;
    use crate::validation::ValidationError;

    #[test]
    fn test_empty_map_takes_no_space() {
        assert_eq!(summary_height(&ErrorMap::new()), 0);
        assert!(summary_lines(&ErrorMap::new()).is_empty());
    }

    #[test]
    fn test_lines_name_field_and_reason() {
        let mut errors = ErrorMap::new();
        errors.insert(FieldName::Phone, ValidationError::InvalidPhoneFormat);
        errors.insert(FieldName::Email, ValidationError::InvalidEmailFormat);

        assert_eq!(summary_height(&errors), 4);
        let text: Vec<String> = summary_lines(&errors)
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert_eq!(
            text,
            vec![
                "email: email format is invalid".to_string(),
                "phone: phone must have 10 digits".to_string(),
            ]
        );
    }
}
