/**
 * Database Setup
 *
 * Opens the SQLite pool named by `DATABASE_URL` (creating the file if it
 * does not exist) and applies the migrations under `migrations/`.
 *
 * Unlike optional services, the database is required: a connection or
 * migration failure stops startup.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool, Transaction};
use thiserror::Error;

/// Startup failures of the database layer
#[derive(Debug, Error)]
pub enum DatabaseSetupError {
    #[error("failed to connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Connect to the database and bring the schema up to date
pub async fn load_database(database_url: &str) -> Result<SqlitePool, DatabaseSetupError> {
    tracing::info!("Connecting to database...");

    let connect_error = |source: sqlx::Error| DatabaseSetupError::Connect {
        url: database_url.to_string(),
        source,
    };

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(connect_error)?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .map_err(connect_error)?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

/// Begin a transaction holding the write lock from its first statement
///
/// A deferred transaction that reads before it writes gets SQLITE_BUSY
/// immediately when another writer holds the lock, without waiting out the
/// busy timeout.
pub async fn begin_write(pool: &SqlitePool) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
    pool.begin_with("BEGIN IMMEDIATE").await
}
