//! Common test utilities and helpers
//!
//! - Database fixture (in-memory SQLite, migrated)
//! - Authentication helpers (settings, users, tokens)
//! - Request driver for the full router
//! - Envelope assertions

#![allow(dead_code)]

pub mod app;
pub mod assertions;
pub mod auth_helpers;
pub mod database;

pub use app::*;
pub use assertions::*;
pub use auth_helpers::*;
pub use database::*;
