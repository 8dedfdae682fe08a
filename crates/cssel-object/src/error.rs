//! Error types for object encoding and materialization.

use thiserror::Error;

/// Errors that can occur while serializing, materializing or mutating an
/// [`crate::Object`].
#[derive(Error, Debug)]
pub enum ObjectError {
    /// The input text is not valid JSON.
    #[error("malformed input: {0}")]
    MalformedInput(#[source] serde_json::Error),

    /// A value could not be encoded as JSON.
    #[error("failed to encode value: {0}")]
    Encode(#[source] serde_json::Error),

    /// The input parsed, but the top level is not a JSON object.
    #[error("expected a JSON object, found {found}")]
    NotAnObject {
        /// JSON type of the top-level value (`array`, `string`, ...).
        found: &'static str,
    },

    /// The schema requires a field the input does not have.
    #[error("missing required field '{field}'")]
    MissingField {
        /// Name of the missing field.
        field: String,
    },

    /// Attempted to assign to a non-writable property.
    #[error("property '{field}' is read-only")]
    ReadOnly {
        /// Name of the property.
        field: String,
    },

    /// Attempted to remove or redefine a non-configurable property.
    #[error("property '{field}' is not configurable")]
    NotConfigurable {
        /// Name of the property.
        field: String,
    },

    /// The object's fields do not fit the requested Rust type.
    #[error("object does not match target type: {0}")]
    Mismatch(#[source] serde_json::Error),
}
