/**
 * User Database Operations
 *
 * Queries against the `users` table. Every function takes any SQLite
 * executor, so the same query runs on the pool, on a single pooled
 * connection (the authentication gate), or inside a transaction.
 */

use chrono::Utc;
use sqlx::{Executor, Sqlite};
use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::shared::{UserCreate, UserProfile};

/// Insert a new user and return the persisted row
///
/// # Arguments
/// * `executor` - Pool, connection or transaction
/// * `payload` - Registration payload (its plaintext password is ignored)
/// * `hashed_password` - bcrypt hash of the password
pub async fn create_user<'e, E>(
    executor: E,
    payload: &UserCreate,
    hashed_password: &str,
) -> Result<UserProfile, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let id = Uuid::new_v4().simple().to_string();
    let now = Utc::now();

    sqlx::query_as::<_, UserProfile>(
        r#"
        INSERT INTO users (
            id, username, full_name, phone, hashed_password, address, city, country,
            postal_code, date_of_birth, gender, avatar_url, is_active, created_at, updated_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, TRUE, ?, ?)
        RETURNING id, username, full_name, phone, hashed_password, address, city, country,
                  postal_code, date_of_birth, gender, avatar_url, is_active, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&payload.username)
    .bind(&payload.full_name)
    .bind(&payload.phone)
    .bind(hashed_password)
    .bind(&payload.address)
    .bind(&payload.city)
    .bind(&payload.country)
    .bind(&payload.postal_code)
    .bind(payload.date_of_birth)
    .bind(payload.gender.unwrap_or_default())
    .bind(&payload.avatar_url)
    .bind(now)
    .bind(now)
    .fetch_one(executor)
    .await
}

/// All users with this username
///
/// The UNIQUE constraint means at most one row; callers that must detect a
/// broken constraint use `single_user` on the result.
pub async fn find_users_by_username<'e, E>(
    executor: E,
    username: &str,
) -> Result<Vec<UserProfile>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, UserProfile>(
        r#"
        SELECT id, username, full_name, phone, hashed_password, address, city, country,
               postal_code, date_of_birth, gender, avatar_url, is_active, created_at, updated_at
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_all(executor)
    .await
}

/// Get user by username, failing loudly if the username is not unique
pub async fn get_user_by_username<'e, E>(
    executor: E,
    username: &str,
) -> Result<Option<UserProfile>, ApiError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = find_users_by_username(executor, username).await?;
    single_user(rows, username)
}

/// Reduce a username lookup to at most one user
pub fn single_user(
    mut rows: Vec<UserProfile>,
    username: &str,
) -> Result<Option<UserProfile>, ApiError> {
    match rows.len() {
        0 => Ok(None),
        1 => Ok(rows.pop()),
        n => Err(ApiError::data_integrity(format!(
            "Multiple users ({}) found with username: {}",
            n, username
        ))),
    }
}
