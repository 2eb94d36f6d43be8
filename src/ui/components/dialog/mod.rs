//! Dialog components for TUI

mod base;
mod success_dialog;

pub use base::centered_rect;
pub use success_dialog::render_success_dialog;
