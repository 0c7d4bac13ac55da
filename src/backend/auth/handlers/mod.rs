//! Authentication Handlers Module
//!
//! HTTP handlers for the account endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── register.rs  - User registration handler
//! ├── login.rs     - User authentication handler
//! └── me.rs        - Current user handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /user/register
//! - **`login`** - POST /user/login
//! - **`get_me`** - GET /users/me (requires a bearer token)

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Current user handler
pub mod me;

pub use login::login;
pub use me::get_me;
pub use register::register;
