//! Trips Module
//!
//! Trip listing, creation, pinning and favorites.
//!
//! # Module Structure
//!
//! ```text
//! trips/
//! ├── mod.rs       - Module exports and documentation
//! ├── db.rs        - `trips` and `user_favorites` queries
//! ├── service.rs   - TripService
//! └── handlers.rs  - HTTP handlers
//! ```
//!
//! # Endpoints
//!
//! - `GET /trips/list` - open
//! - `POST /trips/create` - caller becomes the owner
//! - `PUT /trips/{trip_id}/pin` - open
//! - `POST /trips/{trip_id}/favorite` - caller required
//! - `POST /trips/{trip_id}/unfavorite` - caller required
//! - `POST /trips/favorite` - caller's favorites

pub mod db;

pub mod service;

pub mod handlers;

pub use service::TripService;
