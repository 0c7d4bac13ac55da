//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Prefix nesting, middleware layers, fallback
//! └── api_routes.rs   - User and trip endpoints
//! ```
//!
//! All API routes live under the configured prefix (`/v1` by default), for
//! example `POST /v1/user/login` or `PUT /v1/trips/7/pin`.

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
