//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - authentication gate and the `CurrentUser` extractor

pub mod auth;

pub use auth::{auth_gate, AuthenticatedUser, CurrentUser, UnresolvedIdentity, AUTH_HEADER};
