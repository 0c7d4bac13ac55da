//! Database test fixtures
//!
//! Each fixture owns a private SQLite database. The default is in-memory,
//! with a single connection kept alive for the whole test, since an
//! in-memory database disappears with its last connection. Tests that need
//! several connections racing each other use a file-backed database opened
//! the way the server opens it.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tempfile::TempDir;
use trip_planner::backend::server::config::load_database;

/// Create a migrated in-memory pool
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");

    run_migrations(&pool).await.expect("Failed to run migrations");
    pool
}

/// Run database migrations for testing
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Test database fixture
pub struct TestDatabase {
    pool: SqlitePool,
    _dir: Option<TempDir>,
}

impl TestDatabase {
    pub async fn new() -> Self {
        Self {
            pool: create_test_pool().await,
            _dir: None,
        }
    }

    /// File-backed database with a full connection pool
    pub async fn file() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let url = format!("sqlite://{}", dir.path().join("trip.db").display());
        let pool = load_database(&url).await.expect("Failed to open file database");
        Self {
            pool,
            _dir: Some(dir),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Number of rows in `table`
    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows")
    }
}
