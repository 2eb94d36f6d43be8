//! Last successful submission, kept apart from the live form

use super::forms::{FieldName, FormSnapshot};
use chrono::{DateTime, Local};
use serde::Serialize;

/// Placeholder shown for empty values in the confirmation dialog
pub const NOT_AVAILABLE: &str = "N/A";

/// Immutable copy of the form taken when a submission succeeds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmittedRecord {
    #[serde(flatten)]
    values: FormSnapshot,
    submitted_at: DateTime<Local>,
}

impl SubmittedRecord {
    pub fn new(values: FormSnapshot, submitted_at: DateTime<Local>) -> Self {
        Self {
            values,
            submitted_at,
        }
    }

    pub fn get(&self, field: FieldName) -> &str {
        self.values.get(field)
    }

    pub fn submitted_at(&self) -> DateTime<Local> {
        self.submitted_at
    }

    /// Country with its first character uppercased
    pub fn country_label(&self) -> String {
        capitalize_first(&self.values.country)
    }

    /// Presentation value for a field; the password is never shown
    pub fn display_value(&self, field: FieldName) -> String {
        let raw = self.get(field);
        if raw.is_empty() {
            return NOT_AVAILABLE.to_string();
        }
        match field {
            FieldName::Age => format!("{raw} years"),
            FieldName::Country => self.country_label(),
            FieldName::Password => "•".repeat(8),
            _ => raw.to_string(),
        }
    }
}

/// Uppercase the first character, leave the rest untouched
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Holds at most one submitted record and whether it is on screen
#[derive(Debug, Clone, Default)]
pub struct SubmissionResult {
    record: Option<SubmittedRecord>,
    visible: bool,
}

impl SubmissionResult {
    /// Replace the record and make it visible
    pub fn show(&mut self, record: SubmittedRecord) {
        self.record = Some(record);
        self.visible = true;
    }

    /// Hide the dialog; the record is kept
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible && self.record.is_some()
    }

    pub fn record(&self) -> Option<&SubmittedRecord> {
        self.record.as_ref()
    }

    /// The record, only while the dialog is showing
    pub fn visible_record(&self) -> Option<&SubmittedRecord> {
        self.record().filter(|_| self.visible)
    }
}
