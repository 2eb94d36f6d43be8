//! Whole-form validation

use super::validators::{validate_field, ValidationError};
use crate::state::{FieldName, FormSnapshot};
use std::collections::BTreeMap;

/// Per-field validation errors, iterated in field display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: BTreeMap<FieldName, ValidationError>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, error: ValidationError) {
        self.errors.insert(field, error);
    }

    /// Drop the error for `field`, returning it if there was one
    pub fn remove(&mut self, field: FieldName) -> Option<ValidationError> {
        self.errors.remove(&field)
    }

    pub fn get(&self, field: FieldName) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &ValidationError)> {
        self.errors.iter().map(|(field, err)| (*field, err))
    }

    /// Keys of the fields currently in error
    pub fn fields(&self) -> Vec<&'static str> {
        self.errors.keys().map(|f| f.key()).collect()
    }
}

/// Validate every field of `snapshot` and collect one error per invalid field.
///
/// A failing field never stops the remaining fields from being checked. The
/// form is valid iff the returned map is empty.
pub fn validate_form(snapshot: &FormSnapshot) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for field in FieldName::ALL {
        if let Err(err) = validate_field(field, snapshot.get(field)) {
            errors.insert(field, err);
        }
    }
    errors
}
