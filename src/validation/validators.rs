//! Field validators
//!
//! Every validator is a pure function returning a [`ValidationOutcome`].
//! Composite validators run the not-empty rule first, so an empty value is
//! always reported as [`ValidationError::EmptyField`] rather than a format
//! error.

use crate::state::FieldName;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Minimum password length in characters
pub const PASSWORD_MIN_LENGTH: usize = 8;
/// Youngest accepted age (inclusive)
pub const MIN_AGE: i64 = 18;
/// Oldest accepted age (inclusive)
pub const MAX_AGE: i64 = 100;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

// ASCII digits only; `\d` would also accept other Unicode decimal digits
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

/// Password rule that was not satisfied, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    Length,
    Uppercase,
    Lowercase,
    Digit,
}

impl PasswordRule {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Length => "password must be at least 8 characters long",
            Self::Uppercase => "password must contain at least one uppercase letter",
            Self::Lowercase => "password must contain at least one lowercase letter",
            Self::Digit => "password must contain at least one digit",
        }
    }
}

/// Reason a field value was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("field {field} cannot be empty")]
    EmptyField { field: String },

    #[error("email format is invalid")]
    InvalidEmailFormat,

    #[error("{}", .0.message())]
    InvalidPassword(PasswordRule),

    #[error("age must be between 18 and 100")]
    InvalidAgeRange,

    #[error("phone must have 10 digits")]
    InvalidPhoneFormat,

    #[error("field {field} must be at least {min_length} characters long")]
    TooShort { field: String, min_length: usize },
}

/// `Ok(())` when the value is valid, `Err(reason)` otherwise
pub type ValidationOutcome = Result<(), ValidationError>;

/// Reject values that are empty after trimming whitespace
pub fn validate_not_empty(field: &str, value: &str) -> ValidationOutcome {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Single-level `local@domain.tld` shape check
pub fn validate_email(value: &str) -> ValidationOutcome {
    validate_not_empty(FieldName::Email.key(), value)?;

    if !EMAIL_REGEX.is_match(value) {
        return Err(ValidationError::InvalidEmailFormat);
    }
    Ok(())
}

/// Reports only the first failing rule: length, uppercase, lowercase, digit
pub fn validate_password(value: &str) -> ValidationOutcome {
    validate_not_empty(FieldName::Password.key(), value)?;

    let too_short =
        validate_min_length(FieldName::Password.key(), value, PASSWORD_MIN_LENGTH).is_err();
    let rule = if too_short {
        Some(PasswordRule::Length)
    } else if !value.chars().any(|c| c.is_ascii_uppercase()) {
        Some(PasswordRule::Uppercase)
    } else if !value.chars().any(|c| c.is_ascii_lowercase()) {
        Some(PasswordRule::Lowercase)
    } else if !value.chars().any(|c| c.is_ascii_digit()) {
        Some(PasswordRule::Digit)
    } else {
        None
    };

    match rule {
        Some(rule) => Err(ValidationError::InvalidPassword(rule)),
        None => Ok(()),
    }
}

/// Strict base-10 parse of the trimmed value; trailing garbage is rejected
pub fn validate_age(value: &str) -> ValidationOutcome {
    validate_not_empty(FieldName::Age.key(), value)?;

    match value.trim().parse::<i64>() {
        Ok(age) if (MIN_AGE..=MAX_AGE).contains(&age) => Ok(()),
        _ => Err(ValidationError::InvalidAgeRange),
    }
}

/// Exactly ten digits, no separators or country code
pub fn validate_phone(value: &str) -> ValidationOutcome {
    validate_not_empty(FieldName::Phone.key(), value)?;

    if !PHONE_REGEX.is_match(value) {
        return Err(ValidationError::InvalidPhoneFormat);
    }
    Ok(())
}

/// Generic minimum-length rule, counted in characters
pub fn validate_min_length(field: &str, value: &str, min_length: usize) -> ValidationOutcome {
    validate_not_empty(field, value)?;

    if value.chars().count() < min_length {
        return Err(ValidationError::TooShort {
            field: field.to_string(),
            min_length,
        });
    }
    Ok(())
}

/// Run the rule chain registered for `field`
pub fn validate_field(field: FieldName, value: &str) -> ValidationOutcome {
    match field {
        FieldName::Name | FieldName::Country => validate_not_empty(field.key(), value),
        FieldName::Email => validate_email(value),
        FieldName::Password => validate_password(value),
        FieldName::Age => validate_age(value),
        FieldName::Phone => validate_phone(value),
    }
}
