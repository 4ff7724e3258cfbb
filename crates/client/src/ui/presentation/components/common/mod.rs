//! Common reusable UI components.
//!
//! Shared form controls and layout primitives used across multiple views.

mod form_field;
pub use form_field::FormField;
