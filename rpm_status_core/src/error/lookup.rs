//! Content unit lookup error types

use thiserror::Error;

/// Errors raised while formatting content units
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LookupError {
    /// No formatter is registered for the type identifier
    #[error("No formatter for content type '{type_id}'")]
    UnknownContentType { type_id: String },

    /// The unit lacks a field its formatter needs
    #[error("Unit of type '{type_id}' is missing field '{field}'")]
    MissingUnitField { type_id: String, field: String },
}

impl LookupError {
    /// Create an unknown content type error
    pub fn unknown_content_type(type_id: &str) -> Self {
        Self::UnknownContentType {
            type_id: type_id.to_string(),
        }
    }

    /// Create a missing unit field error
    pub fn missing_unit_field(type_id: &str, field: &str) -> Self {
        Self::MissingUnitField {
            type_id: type_id.to_string(),
            field: field.to_string(),
        }
    }
}
