//! Registration form state: live values, errors, and focus

use super::field::{FieldName, InputKind};
use super::snapshot::FormSnapshot;
use crate::config::CountryOption;
use crate::validation::{validate_form, ErrorMap};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Focus index of the submit button (one past the last field)
pub const SUBMIT_BUTTON_INDEX: usize = FieldName::ALL.len();

/// Live registration form
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub snapshot: FormSnapshot,
    pub errors: ErrorMap,
    /// 0..=5 are the fields, 6 is the submit button
    pub active_field_index: usize,
    pub password_visible: bool,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field under focus, `None` when the submit button is focused
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_field_index)
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }

    /// Store a new value and drop that field's error without re-validating.
    /// Returns true if an error was cleared.
    pub fn change_field(&mut self, field: FieldName, value: String) -> bool {
        self.snapshot.set(field, value);
        self.errors.remove(field).is_some()
    }

    /// Validate the current values.
    ///
    /// On success the form is reset and the submitted values are returned.
    /// On failure the errors replace the previous ones and the values are kept.
    pub fn submit(&mut self) -> Result<FormSnapshot, &ErrorMap> {
        let errors = validate_form(&self.snapshot);
        if errors.is_empty() {
            let submitted = std::mem::take(&mut self.snapshot);
            self.errors.clear();
            Ok(submitted)
        } else {
            self.errors = errors;
            Err(&self.errors)
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    /// Value the active field would hold after typing `c`.
    /// Select fields and the submit button do not accept typed input, and
    /// number fields only take ASCII digits.
    pub fn value_with_char(&self, c: char) -> Option<(FieldName, String)> {
        let field = self.active_field_name()?;
        match field.kind() {
            InputKind::Select => return None,
            InputKind::Number if !c.is_ascii_digit() => return None,
            _ => {}
        }
        let mut value = self.snapshot.get(field).to_string();
        value.push(c);
        Some((field, value))
    }

    /// Value the active field would hold after a backspace
    pub fn value_without_last_char(&self) -> Option<(FieldName, String)> {
        let field = self.active_field_name()?;
        let mut value = self.snapshot.get(field).to_string();
        if field.kind() == InputKind::Select {
            value.clear();
        } else {
            value.pop()?;
        }
        Some((field, value))
    }

    /// Next country value when cycling through `options`.
    /// The empty "no selection" entry sits before the first option.
    pub fn cycled_country(&self, options: &[CountryOption], forward: bool) -> String {
        let current = self.snapshot.get(FieldName::Country);
        let len = options.len() + 1;
        let position = options
            .iter()
            .position(|o| o.value == current)
            .map(|i| i + 1)
            .unwrap_or(0);
        let next = if forward {
            (position + 1) % len
        } else {
            (position + len - 1) % len
        };
        match next {
            0 => String::new(),
            n => options[n - 1].value.clone(),
        }
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        SUBMIT_BUTTON_INDEX + 1 // six fields plus the submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_BUTTON_INDEX);
    }
}
