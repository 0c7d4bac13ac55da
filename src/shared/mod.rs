//! Shared Module
//!
//! Types that do not depend on the HTTP stack: persisted records, request
//! and response bodies, validation errors, and application settings.
//!
//! # Overview
//!
//! Everything here serializes with serde and the persisted records derive
//! `sqlx::FromRow`, so the backend can move rows straight into responses
//! without an intermediate layer.

/// User profiles, registration and login bodies
pub mod user;

/// Trips, trip creation and listing parameters
pub mod trip;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{ConfigError, LogSettings, Settings, SettingsBuilder};
pub use trip::{CityEntry, SortOrder, Trip, TripCreate, TripFilter, TripListQuery, TripResponse};
pub use user::{Gender, Token, UserCreate, UserLogin, UserProfile, UserResponse};
