//! Form domain layer
//!
//! Type-safe field identifiers, the value snapshot, and the live
//! registration form with its focus and error state.

mod field;
mod form_state;
mod snapshot;

pub use field::{FieldName, InputKind};
pub use form_state::{Form, RegistrationForm};
pub use snapshot::FormSnapshot;
