/**
 * API Error Types
 *
 * Every fallible handler and service returns `ApiError`. Each variant maps
 * to an explicit HTTP status code that is rendered into the failure
 * envelope.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Typed domain failures carrying their own status: authentication (401),
 * duplicate favorite (400), missing trip or user (404), duplicate
 * registration or wrong password (405), malformed username (406),
 * invalid payload (422).
 *
 * ## Database Errors
 *
 * Any `sqlx::Error`. Logged with full detail, rendered as a generic 500.
 *
 * ## Data Integrity Errors
 *
 * More than one row where the schema promises one. Logged, rendered as a
 * distinct 500 so it is never confused with an ordinary not-found.
 *
 * ## Internal Errors
 *
 * Everything else (hashing, token signing).
 */

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend error type
///
/// # Usage
///
/// ```rust
/// use trip_planner::backend::error::ApiError;
/// use axum::http::StatusCode;
///
/// let err = ApiError::not_found("Trip not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Typed domain error with an explicit status code
    #[error("{message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Message rendered into the envelope's `error` field
        message: String,
    },

    /// Persistence failure
    #[error("Database error: {0}")]
    DatabaseError(sqlx::Error),

    /// A uniqueness promise was broken by the stored data
    #[error("Data inconsistency: {0}")]
    DataIntegrityError(String),

    /// Any other unexpected failure
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, message)
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::METHOD_NOT_ALLOWED, message)
    }

    pub fn not_acceptable(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_ACCEPTABLE, message)
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    /// Create a data integrity error; the detail is logged, not returned
    pub fn data_integrity(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        tracing::error!("Data integrity fault: {}", detail);
        Self::DataIntegrityError(detail)
    }

    /// Create an internal error; the detail is logged, not returned
    pub fn internal(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        tracing::error!("Unexpected error: {}", detail);
        Self::InternalError(detail)
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `DatabaseError` - 500 Internal Server Error
    /// - `DataIntegrityError` - 500 Internal Server Error
    /// - `InternalError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::DatabaseError(_) | Self::DataIntegrityError(_) | Self::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show to clients
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::DatabaseError(_) => "Database error".to_string(),
            Self::DataIntegrityError(_) => "Data inconsistency error".to_string(),
            Self::InternalError(_) => "Internal server error".to_string(),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        Self::DatabaseError(err)
    }
}

impl From<SharedError> for ApiError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::MalformedUsername(_) => Self::not_acceptable(err.to_string()),
            SharedError::ValidationError { .. } => Self::unprocessable(err.to_string()),
        }
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::internal(format!("password hashing failed: {err}"))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        Self::handler(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::warn!("Rejected query string: {}", rejection.body_text());
        Self::handler(rejection.status(), rejection.body_text())
    }
}
