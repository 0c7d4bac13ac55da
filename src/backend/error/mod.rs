//! Backend Error Module
//!
//! Error types returned by services, handlers and middleware, and their
//! rendering into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - ApiError definition and constructors
//! └── conversion.rs - IntoResponse implementation
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;

/// Result alias used across the backend
pub type ApiResult<T> = Result<T, ApiError>;
