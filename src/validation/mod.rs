//! Registration form validation
//!
//! - `validators`: one pure function per rule
//! - `aggregator`: runs every rule over a snapshot and collects an [`ErrorMap`]

mod aggregator;
mod validators;

pub use aggregator::{validate_form, ErrorMap};
pub use validators::ValidationError;
