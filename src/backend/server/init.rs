/**
 * Server Initialization
 *
 * 1. Open the database and apply migrations
 * 2. Build `AppState` (pool, settings, services)
 * 3. Create the router
 */

use axum::Router;
use sqlx::SqlitePool;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, DatabaseSetupError};
use crate::backend::server::state::AppState;
use crate::shared::Settings;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the database cannot be opened or migrated.
pub async fn create_app(settings: Settings) -> Result<Router<()>, DatabaseSetupError> {
    tracing::info!("Initializing trip planner backend");

    let pool = load_database(&settings.database_url).await?;
    let app = create_app_with_pool(pool, settings);

    tracing::info!("Router configured");
    Ok(app)
}

/// Create the application over an existing pool
///
/// The pool must already be migrated.
pub fn create_app_with_pool(pool: SqlitePool, settings: Settings) -> Router<()> {
    create_router(AppState::new(pool, settings))
}
