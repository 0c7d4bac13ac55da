/**
 * Application State Management
 *
 * `AppState` is the single state type of the router. The `FromRef`
 * implementations let handlers extract just the part they use.
 *
 * # Example
 *
 * ```rust,no_run
 * use trip_planner::backend::trips::TripService;
 * use axum::extract::State;
 *
 * async fn handler(State(trips): State<TripService>) {
 *     // ...
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::service::UserService;
use crate::backend::trips::service::TripService;
use crate::shared::Settings;

/// Application state shared by every request
///
/// # Fields
///
/// * `db` - SQLite connection pool
/// * `settings` - immutable settings loaded at startup
/// * `users` - registration and login
/// * `trips` - trip operations
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub settings: Arc<Settings>,
    pub users: UserService,
    pub trips: TripService,
}

impl AppState {
    pub fn new(db: SqlitePool, settings: Settings) -> Self {
        let settings = Arc::new(settings);
        Self {
            users: UserService::new(db.clone(), settings.clone()),
            trips: TripService::new(db.clone()),
            db,
            settings,
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for Arc<Settings> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.settings.clone()
    }
}

impl FromRef<AppState> for UserService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for TripService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.trips.clone()
    }
}
