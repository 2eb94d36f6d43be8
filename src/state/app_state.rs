//! Application state and the submit/reset lifecycle

use super::forms::{FieldName, Form, RegistrationForm};
use super::submission::{SubmissionResult, SubmittedRecord};
use crate::config::{CountryOption, TuiConfig};
use chrono::Local;
use std::time::{Duration, Instant};

/// Result of pressing submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Form was valid, recorded, and reset
    Submitted,
    /// Form had errors; values were kept for correction
    Rejected { error_count: usize },
}

/// Transient message shown in the status bar
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    /// `None` when the timeout is too large to represent; the message then stays
    pub expires_at: Option<Instant>,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub form: RegistrationForm,
    pub submission: SubmissionResult,
    pub status_message: Option<StatusMessage>,
    pub country_options: Vec<CountryOption>,
    pub show_error_summary: bool,
    status_timeout: Duration,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&TuiConfig::default())
    }
}

impl AppState {
    pub fn new(config: &TuiConfig) -> Self {
        let mut form = RegistrationForm::new();
        form.password_visible = config.reveal_password();
        Self {
            form,
            submission: SubmissionResult::default(),
            status_message: None,
            country_options: config.country_options(),
            show_error_summary: config.show_error_summary(),
            status_timeout: config.status_timeout(),
        }
    }

    /// Store the new value and clear that field's error. Validation is not
    /// re-run until the next submit.
    pub fn on_field_change(&mut self, field: FieldName, value: impl Into<String>) {
        if self.form.change_field(field, value.into()) {
            tracing::debug!(field = field.key(), "cleared field error on edit");
        }
    }

    /// Validate the whole form. On success the values are captured for the
    /// confirmation dialog and the form is cleared.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        match self.form.submit() {
            Ok(values) => {
                let record = SubmittedRecord::new(values, Local::now());
                match serde_json::to_string(&record) {
                    Ok(json) => tracing::debug!(record = %json, "registration submitted"),
                    Err(err) => tracing::warn!(error = %err, "failed to serialize submitted record"),
                }
                self.submission.show(record);
                self.form.set_active_field(0);
                SubmitOutcome::Submitted
            }
            Err(errors) => {
                let error_count = errors.len();
                tracing::debug!(fields = ?errors.fields(), "registration rejected");
                SubmitOutcome::Rejected { error_count }
            }
        }
    }

    /// Dismiss the confirmation dialog. The form and the record are left as is.
    pub fn on_reset(&mut self) {
        if self.submission.is_visible() {
            tracing::debug!("confirmation dismissed");
        }
        self.submission.hide();
    }

    pub fn next_form_field(&mut self) {
        self.form.next_field();
    }

    pub fn prev_form_field(&mut self) {
        self.form.prev_field();
    }

    /// Type a character into the active field
    pub fn form_input_char(&mut self, c: char) {
        if let Some((field, value)) = self.form.value_with_char(c) {
            self.on_field_change(field, value);
        }
    }

    /// Delete the last character of the active field
    pub fn form_backspace(&mut self) {
        if let Some((field, value)) = self.form.value_without_last_char() {
            self.on_field_change(field, value);
        }
    }

    /// Move the country select to the next or previous option
    pub fn cycle_country(&mut self, forward: bool) {
        let value = self.form.cycled_country(&self.country_options, forward);
        self.on_field_change(FieldName::Country, value);
    }

    /// Label of the option matching the current country value
    pub fn country_display(&self) -> Option<&str> {
        let value = self.form.snapshot.get(FieldName::Country);
        if value.is_empty() {
            return None;
        }
        Some(
            self.country_options
                .iter()
                .find(|o| o.value == value)
                .map(|o| o.label.as_str())
                .unwrap_or(value),
        )
    }

    pub fn set_status(&mut self, text: impl Into<String>, now: Instant) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            expires_at: now.checked_add(self.status_timeout),
        });
    }

    /// Drop the status message once its time is up
    pub fn expire_status(&mut self, now: Instant) {
        if self
            .status_message
            .as_ref()
            .and_then(|m| m.expires_at)
            .is_some_and(|expires_at| now >= expires_at)
        {
            self.status_message = None;
        }
    }
}
