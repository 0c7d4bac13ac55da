//! Trip Planner - Main Library
//!
//! Backend for a trip-planning application: users register and log in,
//! create and list trips, pin trips, and favorite or unfavorite them.
//!
//! # Module Structure
//!
//! - **`shared`** - Records, request/response bodies, validation and settings
//!   - User profiles and trips (`sqlx::FromRow`)
//!   - Listing filters and sort keys
//!   - `Settings` loaded from the environment
//!
//! - **`backend`** - HTTP server (only compiled with `ssr` feature)
//!   - Axum router under a versioned prefix
//!   - Authentication gate resolving bearer tokens to users
//!   - User and trip services over SQLite
//!   - Uniform JSON response envelope
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Server-side code: axum, bcrypt, jsonwebtoken,
//!   tracing-subscriber
//!
//! # Usage
//!
//! ```rust,no_run
//! use trip_planner::backend::server::init::create_app;
//! use trip_planner::shared::Settings;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::from_env()?;
//! let app = create_app(settings).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for request validation
//! - `backend::error::ApiError` for everything a handler can return; it
//!   renders itself as the failure envelope

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
