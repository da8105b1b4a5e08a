//! Error types for brewlog.
//!
//! One unified error with explicit variants for validation, ownership-masked
//! lookups, store faults and malformed identifiers.

use std::fmt;
use thiserror::Error;

use crate::types::RecordId;

/// The unified error type for brewlog operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Record input failed shape or range checks.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The record does not exist, or it belongs to someone else.
    ///
    /// Both cases produce this same variant so callers cannot probe for
    /// foreign records.
    #[error("record {id} not found")]
    NotFound { id: RecordId },

    /// The document store could not complete the call.
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    /// Malformed identifier, sort key or document body.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Build a [`Error::NotFound`] for the given id.
    pub fn not_found(id: &RecordId) -> Self {
        Error::NotFound { id: id.clone() }
    }

    /// Returns true for [`Error::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// Faults raised by a document store adapter.
///
/// `Clone` so a single failed fetch can be handed to every caller waiting on it.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Local IO failure.
    #[error("IO error: {message}")]
    Io { message: String },

    /// A stored document could not be decoded.
    #[error("corrupt document '{id}': {message}")]
    Corrupt { id: String, message: String },

    /// The remote side is unreachable or refused the call.
    #[error("{message}")]
    Unavailable { message: String },
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io {
            message: err.to_string(),
        }
    }
}

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Wire name of the field (camelCase).
    pub field: &'static str,
    /// Why the value was rejected.
    pub reason: String,
}

/// Input validation failure listing every offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    /// Returns true if the given field was rejected.
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{} {}", field.field, field.reason)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Malformed values that never make it far enough to be validated as a record.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid owner identifier.
    #[error("invalid owner id '{value}': {reason}")]
    OwnerId { value: String, reason: String },

    /// Invalid record identifier.
    #[error("invalid record id '{value}': {reason}")]
    RecordId { value: String, reason: String },

    /// Unknown sort key.
    #[error("invalid sort key '{value}': expected orderDate or overallTasteRating")]
    SortKey { value: String },

    /// Document body was not a JSON object.
    #[error("invalid document: {reason}")]
    Document { reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_every_field() {
        let err = ValidationError {
            fields: vec![
                FieldError {
                    field: "brandName",
                    reason: "must not be empty".to_string(),
                },
                FieldError {
                    field: "acidityRating",
                    reason: "must be between 1 and 10".to_string(),
                },
            ],
        };

        assert!(err.has_field("acidityRating"));
        assert!(!err.has_field("roast"));
        assert_eq!(
            err.to_string(),
            "brandName must not be empty; acidityRating must be between 1 and 10"
        );
    }

    #[test]
    fn not_found_hides_owner() {
        let id = RecordId::new("abc").unwrap();
        let err = Error::not_found(&id);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "record abc not found");
    }
}
