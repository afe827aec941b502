//! The serde parameter surface and its validation.

/// Settings boundary structs and loading.
pub mod settings;
pub(crate) mod validate;
