//! Current values of the registration form

use super::field::FieldName;
use serde::Serialize;

/// One string value per field; every field starts empty. The password is
/// never serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub age: String,
    pub phone: String,
    pub country: String,
}

impl FormSnapshot {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::Age => &self.age,
            FieldName::Phone => &self.phone,
            FieldName::Country => &self.country,
        }
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    fn slot_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::Age => &mut self.age,
            FieldName::Phone => &mut self.phone,
            FieldName::Country => &mut self.country,
        }
    }

    /// True when every field is empty
    #[cfg(test)]
    pub fn is_blank(&self) -> bool {
        FieldName::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}
