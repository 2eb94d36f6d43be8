//! Confirmation dialog shown after a successful registration

use super::base::{render_dialog, wrap_text, DialogConfig};
use crate::state::{FieldName, SubmittedRecord};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

const MAX_WIDTH: u16 = 56;

/// Text columns inside the borders and padding
const BODY_WIDTH: usize = (MAX_WIDTH - 6) as usize;

/// Column where record values start
const LABEL_WIDTH: usize = 9;

/// Fields listed in the dialog; the password is left out
const SHOWN_FIELDS: [FieldName; 5] = [
    FieldName::Name,
    FieldName::Email,
    FieldName::Age,
    FieldName::Phone,
    FieldName::Country,
];

fn row_label(field: FieldName) -> &'static str {
    match field {
        FieldName::Name => "Name",
        FieldName::Email => "Email",
        FieldName::Password => "Password",
        FieldName::Age => "Age",
        FieldName::Phone => "Phone",
        FieldName::Country => "Country",
    }
}

/// Body lines describing the submitted record
pub fn record_lines(record: &SubmittedRecord) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = wrap_text(
        "The data has been registered correctly:",
        BODY_WIDTH,
    )
    .into_iter()
    .map(Line::from)
    .collect();
    lines.push(Line::from(""));

    for field in SHOWN_FIELDS {
        let value_lines = wrap_text(&record.display_value(field), BODY_WIDTH - LABEL_WIDTH);
        for (i, chunk) in value_lines.into_iter().enumerate() {
            // continuation lines stay under the value column
            let label = if i == 0 {
                format!("{}:", row_label(field))
            } else {
                String::new()
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<width$}", label, width = LABEL_WIDTH),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(chunk, Style::default().fg(Color::White)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "Submitted at {}",
            record.submitted_at().format("%Y-%m-%d %H:%M:%S")
        ),
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

/// Render the success dialog overlay centered on the screen
pub fn render_success_dialog(frame: &mut Frame, record: &SubmittedRecord) {
    let hint = vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" or "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to close"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "✔ Registration successful!",
            title_color: Color::Green,
            border_color: Color::Green,
            body: record_lines(record),
            hint: Some(hint),
            max_width: MAX_WIDTH,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormSnapshot;
    use chrono::{Local, TimeZone};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn record_with(name: &str, email: &str) -> SubmittedRecord {
        let values = FormSnapshot {
            name: name.to_string(),
            email: email.to_string(),
            password: "Abcdefg1".to_string(),
            age: "25".to_string(),
            phone: "3001234567".to_string(),
            country: "colombia".to_string(),
        };
        let at = Local.with_ymd_and_hms(2026, 3, 1, 9, 5, 0).unwrap();
        SubmittedRecord::new(values, at)
    }

    #[test]
    fn test_long_values_wrap_under_value_column() {
        let record = record_with(
            "Maria Fernanda de los Angeles Gutierrez Villalobos Restrepo",
            "maria.fernanda.gutierrez.villalobos@example-mail.com",
        );
        let text: Vec<String> = record_lines(&record).iter().map(line_text).collect();

        assert!(text.contains(&"Name:    Maria Fernanda de los Angeles Gutierrez".to_string()));
        assert!(text.contains(&"         Villalobos Restrepo".to_string()));
        let joined: String = text.iter().map(|l| l.trim()).collect();
        assert!(joined.contains("maria.fernanda.gutierrez.villalobos@example-mail.com"));
        assert!(text.iter().all(|l| l.chars().count() <= BODY_WIDTH));
    }

    #[test]
    fn test_lines_show_formatted_values_without_password() {
        let record = record_with("Juan Perez", "a@b.com");

        let text: Vec<String> = record_lines(&record).iter().map(line_text).collect();
        assert!(text.contains(&"Name:    Juan Perez".to_string()));
        assert!(text.contains(&"Age:     25 years".to_string()));
        assert!(text.contains(&"Country: Colombia".to_string()));
        assert!(text.contains(&"Submitted at 2026-03-01 09:05:00".to_string()));
        assert!(!text.iter().any(|l| l.contains("Abcdefg1")));
    }
}
