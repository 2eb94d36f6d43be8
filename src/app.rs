//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{AppState, FieldName, SubmitOutcome};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

/// Main application struct
#[derive(Debug, Default)]
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            state: AppState::new(config),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Periodic housekeeping between input events
    pub fn on_tick(&mut self) {
        self.state.expire_status(Instant::now());
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Global quit works even with the dialog open
        if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            self.quit = true;
            return;
        }

        // Confirmation dialog is modal
        if self.state.submission.is_visible() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.state.on_reset();
            }
            return;
        }

        self.handle_form_key(key);
    }

    /// Handle keys while the form has focus
    fn handle_form_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let active = self.state.form.active_field_name();
        let on_submit_button = self.state.form.is_submit_active();

        match key.code {
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('r') if ctrl => self.state.form.toggle_password_visibility(),
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            KeyCode::Enter if on_submit_button || active == Some(FieldName::Country) => {
                self.submit()
            }
            KeyCode::Enter => self.state.next_form_field(),
            KeyCode::Right if active == Some(FieldName::Country) => self.state.cycle_country(true),
            KeyCode::Left if active == Some(FieldName::Country) => {
                self.state.cycle_country(false)
            }
            KeyCode::Char(c) if !ctrl => self.state.form_input_char(c),
            KeyCode::Backspace => self.state.form_backspace(),
            _ => {}
        }
    }

    /// Validate and submit, reporting the outcome in the status bar
    fn submit(&mut self) {
        let message = match self.state.on_submit() {
            SubmitOutcome::Submitted => "Registration submitted".to_string(),
            SubmitOutcome::Rejected { error_count: 1 } => "1 field needs attention".to_string(),
            SubmitOutcome::Rejected { error_count } => {
                format!("{error_count} fields need attention")
            }
        };
        self.state.set_status(message, Instant::now());
    }

    /// Handle a mouse event. Clicking anywhere closes the confirmation dialog.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if self.state.submission.is_visible() {
                self.state.on_reset();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn click() -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Fill every field through the keyboard, leaving focus on Country
    fn fill_by_keyboard(app: &mut App) {
        type_text(app, "Juan Perez");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "a@b.com");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "Abcdefg1");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "25");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "3001234567");
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Right));
    }

    mod quitting {
        use super::*;

        #[test]
        fn test_should_quit_initially_false() {
            assert!(!App::default().should_quit());
        }

        #[test]
        fn test_ctrl_c_quits() {
            let mut app = App::default();
            app.handle_key(ctrl('c'));
            assert!(app.should_quit());
        }

        #[test]
        fn test_ctrl_q_quits_with_dialog_open() {
            let mut app = App::default();
            fill_by_keyboard(&mut app);
            app.handle_key(ctrl('s'));
            assert!(app.state.submission.is_visible());
            app.handle_key(ctrl('q'));
            assert!(app.should_quit());
        }

        #[test]
        fn test_esc_does_not_quit() {
            let mut app = App::default();
            app.handle_key(key(KeyCode::Esc));
            assert!(!app.should_quit());
        }
    }

    mod form_keys {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_goes_to_active_field() {
            let mut app = App::default();
            type_text(&mut app, "Ana");
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.state.form.snapshot.name, "An");
        }

        #[test]
        fn test_age_ignores_non_digit_keys() {
            let mut app = App::default();
            app.state.form.active_field_index = FieldName::Age.index();
            type_text(&mut app, "2x5.0");
            assert_eq!(app.state.form.snapshot.age, "250");
        }

        #[test]
        fn test_tab_and_backtab_cycle_focus() {
            let mut app = App::default();
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.state.form.active_field_name(), Some(FieldName::Email));
            app.handle_key(key(KeyCode::BackTab));
            app.handle_key(key(KeyCode::BackTab));
            assert!(app.state.form.is_submit_active());
        }

        #[test]
        fn test_enter_on_text_field_moves_on() {
            let mut app = App::default();
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.state.form.active_field_name(), Some(FieldName::Email));
            assert!(app.state.form.errors.is_empty());
        }

        #[test]
        fn test_left_right_choose_country() {
            let mut app = App::default();
            app.state.form.active_field_index = FieldName::Country.index();
            app.handle_key(key(KeyCode::Right));
            app.handle_key(key(KeyCode::Right));
            assert_eq!(app.state.form.snapshot.country, "mexico");
            app.handle_key(key(KeyCode::Left));
            assert_eq!(app.state.form.snapshot.country, "colombia");
        }

        #[test]
        fn test_left_right_ignored_elsewhere() {
            let mut app = App::default();
            app.handle_key(key(KeyCode::Right));
            assert!(app.state.form.snapshot.is_blank());
        }

        #[test]
        fn test_ctrl_r_toggles_password_visibility() {
            let mut app = App::default();
            app.handle_key(ctrl('r'));
            assert!(app.state.form.password_visible);
            // control chords never reach the field
            assert!(app.state.form.snapshot.is_blank());
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_ctrl_s_with_errors_reports_count() {
            let mut app = App::default();
            type_text(&mut app, "Juan");
            app.handle_key(ctrl('s'));
            assert_eq!(app.state.form.errors.len(), 5);
            assert_eq!(app.state.form.snapshot.name, "Juan");
            assert_eq!(
                app.state.status_message.as_ref().map(|m| m.text.as_str()),
                Some("5 fields need attention")
            );
            assert!(!app.state.submission.is_visible());
        }

        #[test]
        fn test_enter_on_country_submits() {
            let mut app = App::default();
            fill_by_keyboard(&mut app);
            app.handle_key(key(KeyCode::Enter));

            assert!(app.state.submission.is_visible());
            assert!(app.state.form.snapshot.is_blank());
            let record = app.state.submission.record().unwrap();
            assert_eq!(record.get(FieldName::Name), "Juan Perez");
            assert_eq!(record.get(FieldName::Country), "colombia");
            assert_eq!(
                app.state.status_message.as_ref().map(|m| m.text.as_str()),
                Some("Registration submitted")
            );
        }

        #[test]
        fn test_enter_on_submit_button_submits() {
            let mut app = App::default();
            fill_by_keyboard(&mut app);
            app.handle_key(key(KeyCode::Tab));
            assert!(app.state.form.is_submit_active());
            app.handle_key(key(KeyCode::Enter));
            assert!(app.state.submission.is_visible());
        }

        #[test]
        fn test_submit_with_huge_status_timeout() {
            let config = TuiConfig {
                status_timeout_secs: Some(u64::MAX),
                ..Default::default()
            };
            let mut app = App::new(&config);
            app.handle_key(ctrl('s'));
            assert_eq!(
                app.state.status_message.as_ref().map(|m| m.text.as_str()),
                Some("6 fields need attention")
            );
            app.on_tick();
            assert!(app.state.status_message.is_some());
        }

        #[test]
        fn test_single_error_message() {
            let mut app = App::default();
            fill_by_keyboard(&mut app);
            app.state.on_field_change(FieldName::Phone, "12345");
            app.handle_key(ctrl('s'));
            assert_eq!(
                app.state.status_message.as_ref().map(|m| m.text.as_str()),
                Some("1 field needs attention")
            );
        }
    }

    mod dialog {
        use super::*;

        fn submitted_app() -> App {
            let mut app = App::default();
            fill_by_keyboard(&mut app);
            app.handle_key(ctrl('s'));
            app
        }

        #[test]
        fn test_dialog_swallows_typing() {
            let mut app = submitted_app();
            type_text(&mut app, "xyz");
            assert!(app.state.form.snapshot.is_blank());
            assert!(app.state.submission.is_visible());
        }

        #[test]
        fn test_enter_closes_dialog() {
            let mut app = submitted_app();
            app.handle_key(key(KeyCode::Enter));
            assert!(!app.state.submission.is_visible());
            assert!(app.state.submission.record().is_some());
        }

        #[test]
        fn test_esc_closes_dialog() {
            let mut app = submitted_app();
            app.handle_key(key(KeyCode::Esc));
            assert!(!app.state.submission.is_visible());
        }

        #[test]
        fn test_click_closes_dialog() {
            let mut app = submitted_app();
            app.handle_mouse(click());
            assert!(!app.state.submission.is_visible());
        }

        #[test]
        fn test_click_without_dialog_is_harmless() {
            let mut app = App::default();
            app.handle_mouse(click());
            assert!(app.state.submission.record().is_none());
        }
    }

    #[test]
    fn test_on_tick_keeps_fresh_status() {
        let mut app = App::default();
        app.state.set_status("hello", Instant::now());
        app.on_tick();
        assert!(app.state.status_message.is_some());
    }
}
