//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: single field with inline error
//! - `error_summary`: box listing every invalid field
//! - `registration_form`: the registration card

mod error_summary;
mod field_renderer;
mod registration_form;

pub use registration_form::{draw as draw_registration, required_height};
