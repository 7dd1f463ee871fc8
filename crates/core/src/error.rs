//! Unified error types for comicache.
//!
//! Every failure the service can raise is one of these variants. The HTTP
//! layer dispatches on the variant to pick a status code and a public body.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single field-level validation problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationDetail {
    pub field: String,
    pub message: String,
}

impl ValidationDetail {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// Unified error types for the comicache service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed request input, caught before any I/O.
    #[error("VALIDATION_ERROR: {message}")]
    Validation { message: String, details: Vec<ValidationDetail> },

    /// Comic identifier is not a positive integer.
    #[error("INVALID_COMIC_ID: {0}")]
    InvalidComicId(String),

    /// The provider confirmed the comic does not exist.
    #[error("COMIC_NOT_FOUND: {0}")]
    ComicNotFound(u32),

    /// Network or provider infrastructure failure, including unexpected HTTP statuses.
    #[error("TRANSPORT_ERROR: {reason}")]
    Transport { status: Option<u16>, reason: String },

    /// Deliberately raised domain error with an explicit HTTP status.
    #[error("OPERATIONAL_ERROR ({status}): {message}")]
    Operational { status: u16, message: String, timestamp: DateTime<Utc> },

    /// A failure on the random-comic path; wraps the underlying cause.
    #[error("RANDOM_FAILED: {0}")]
    Random(Box<Error>),

    /// Anything unclassified.
    #[error("INTERNAL: {0}")]
    Internal(String),
}

impl Error {
    /// Validation failure for a single field.
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        Error::Validation { details: vec![ValidationDetail::new(field, message.clone())], message }
    }

    /// Operational failure stamped with the current time.
    pub fn operational(status: u16, message: impl Into<String>) -> Self {
        Error::Operational { status, message: message.into(), timestamp: Utc::now() }
    }

    /// Innermost cause, looking through random-path wrappers.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Random(inner) => inner.root_cause(),
            other => other,
        }
    }
}
