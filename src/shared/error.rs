//! Shared Error Types
//!
//! Errors raised while validating the request types in this module, before
//! any persistence work happens. The backend maps them onto HTTP statuses.
//!
//! # Usage
//!
//! ```rust
//! use trip_planner::shared::error::SharedError;
//!
//! let error = SharedError::validation("duration", "must be greater than 0");
//! assert_eq!(error.field(), "duration");
//! ```
use thiserror::Error;

/// Validation failures for shared request types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A single field failed validation
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The username is not shaped like an email address
    #[error("username {0} format not valid")]
    MalformedUsername(String),
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
            Self::MalformedUsername(_) => "username",
        }
    }
}
