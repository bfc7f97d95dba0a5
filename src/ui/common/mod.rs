//! Common reusable UI components

pub mod form;

pub use form::{FormField, SelectField, TextAreaField};
