//! Backend Module
//!
//! Server-side code: an Axum HTTP API over SQLite for users and trips.
//! Only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Database setup, application state, app creation
//! - **`routes`** - Route table, prefix nesting, middleware layers
//! - **`middleware`** - Authentication gate and `CurrentUser` extractor
//! - **`auth`** - Users, passwords, access tokens, account handlers
//! - **`trips`** - Trip queries, `TripService`, trip handlers
//! - **`response`** - JSON envelope (`success`, `failure`, `paged_success`)
//! - **`error`** - `ApiError` and its rendering
//! - **`logging`** - Subscriber installation
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── middleware/     - Request middleware
//! ├── auth/           - Authentication
//! ├── trips/          - Trips and favorites
//! ├── response.rs     - Response envelope
//! ├── error/          - Error types
//! └── logging.rs      - Tracing setup
//! ```
//!
//! # Request Flow
//!
//! CORS → trace → authentication gate → handler → service → SQLite →
//! envelope. Any `ApiError` along the way becomes `{"code", "error"}`
//! with the matching HTTP status.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Middleware for request processing
pub mod middleware;

/// Authentication and user management
pub mod auth;

/// Trips and favorites
pub mod trips;

/// Response envelope
pub mod response;

/// Backend error types
pub mod error;

/// Logging setup
pub mod logging;

pub use error::{ApiError, ApiResult};
pub use logging::Logging;
pub use server::{create_app, create_app_with_pool, AppState};
