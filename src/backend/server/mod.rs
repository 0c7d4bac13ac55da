//! Server Module
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Database connection and migrations
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # State Management
//!
//! `AppState` holds the SQLite pool, the settings behind an `Arc`, and the
//! two services built on them. Nothing in it is mutable, so it is cloned
//! freely into every request.
//!
//! # Initialization Flow
//!
//! 1. **Database**: connect (creating the file if needed) and migrate
//! 2. **State**: build services over the pool
//! 3. **Router**: routes, authentication gate, tracing, CORS

/// Application state management
pub mod state;

/// Database connection and migrations
pub mod config;

/// Server initialization
pub mod init;

pub use init::{create_app, create_app_with_pool};
pub use state::AppState;
