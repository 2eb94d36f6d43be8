//! Registration form rendering

use super::error_summary::{draw_error_summary, summary_height};
use super::field_renderer::{draw_field, FieldView, FIELD_HEIGHT};
use crate::app::App;
use crate::state::FieldName;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the registration card: subtitle, error summary, fields, submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(Line::from(Span::styled(
            " Registration Form ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let summary = if app.state.show_error_summary {
        summary_height(&form.errors)
    } else {
        0
    };

    let mut constraints = vec![
        Constraint::Length(1),       // Subtitle
        Constraint::Length(summary), // Error summary
    ];
    constraints.extend(FieldName::ALL.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    let subtitle = Paragraph::new(Line::from(vec![
        Span::styled(
            "Complete all required fields ",
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("*", Style::default().fg(Color::Red)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[0]);

    draw_error_summary(frame, chunks[1], &form.errors);

    for field in FieldName::ALL {
        let value = match field {
            FieldName::Country => app.state.country_display().unwrap_or(""),
            _ => form.snapshot.get(field),
        };
        let view = FieldView {
            field,
            value,
            is_active: form.active_field_index == field.index(),
            error: form.errors.get(field),
            password_visible: form.password_visible,
        };
        draw_field(frame, chunks[2 + field.index()], &view);
    }

    let button_area = chunks[2 + FieldName::ALL.len()];
    render_button(
        frame,
        button_area,
        "Register",
        form.is_submit_active(),
        Color::Green,
    );
}

/// Rows the card needs to show everything without squashing
pub fn required_height(app: &App) -> u16 {
    let summary = if app.state.show_error_summary {
        summary_height(&app.state.form.errors)
    } else {
        0
    };
    2 // borders
        + 1 // subtitle
        + summary
        + FIELD_HEIGHT * FieldName::ALL.len() as u16
        + BUTTON_HEIGHT
}
