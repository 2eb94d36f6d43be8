//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (card_area, status_area) = layout::create_layout(area, forms::required_height(app));

    forms::draw_registration(frame, card_area, app);

    layout::draw_status_bar(frame, status_area, app);

    // Confirmation dialog goes on top of everything else
    if let Some(record) = app.state.submission.visible_record() {
        components::render_success_dialog(frame, record);
    }
}
