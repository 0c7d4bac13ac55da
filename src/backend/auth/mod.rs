//! Authentication Module
//!
//! Registration, login and access tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs        - Module exports and documentation
//! ├── users.rs      - `users` table queries
//! ├── passwords.rs  - bcrypt hashing and verification
//! ├── sessions.rs   - JWT issuance and decoding
//! ├── service.rs    - UserService (register, login)
//! └── handlers/     - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email-shaped username and password → profile stored
//! 2. **Login**: credentials verified → `{access_token, token_type: "bearer"}`
//! 3. **Authenticated requests**: `X-Forwarded-User: Bearer <token>` is
//!    resolved by `middleware::auth::auth_gate`
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt at the configured cost
//! - Tokens are HMAC-signed with the configured secret and algorithm
//! - The password hash is never serialized

/// `users` table queries
pub mod users;

/// Password hashing
pub mod passwords;

/// JWT token generation and validation
pub mod sessions;

/// Registration and login
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, register};
pub use service::UserService;
pub use sessions::TokenError;
