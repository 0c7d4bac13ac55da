//! Trip Database Operations
//!
//! Queries against `trips` and `user_favorites`. Like the user queries,
//! every function takes any SQLite executor so mutations can share one
//! transaction.

use chrono::Utc;
use sqlx::types::Json;
use sqlx::{Executor, QueryBuilder, Sqlite};

use crate::shared::{SortOrder, Trip, TripCreate, TripFilter};

const TRIP_COLUMNS: &str = "trips.id, trips.owner_id, trips.title, trips.start_date, \
     trips.duration, trips.cities, trips.style_tags, trips.settings, trips.is_pinned, \
     trips.created_at";

/// List trips with an optional filter and ordering
///
/// With no ordering the rows come back in storage order.
pub async fn list_trips<'e, E>(
    executor: E,
    filter: Option<&TripFilter>,
    sort: Option<SortOrder>,
) -> Result<Vec<Trip>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let mut query = QueryBuilder::<Sqlite>::new("SELECT ");
    query.push(TRIP_COLUMNS).push(" FROM trips");

    match filter {
        Some(TripFilter::Owner(owner_id)) => {
            query.push(" WHERE trips.owner_id = ").push_bind(owner_id.clone());
        }
        Some(TripFilter::Pinned(pinned)) => {
            query.push(" WHERE trips.is_pinned = ").push_bind(*pinned);
        }
        None => {}
    }

    match sort {
        Some(SortOrder::StartDateAsc) => {
            query.push(" ORDER BY trips.start_date ASC");
        }
        Some(SortOrder::StartDateDesc) => {
            query.push(" ORDER BY trips.start_date DESC");
        }
        None => {}
    }

    query.build_query_as::<Trip>().fetch_all(executor).await
}

/// Get a trip by ID
pub async fn get_trip<'e, E>(executor: E, trip_id: i64) -> Result<Option<Trip>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!("SELECT {} FROM trips WHERE trips.id = ?", TRIP_COLUMNS);
    sqlx::query_as::<_, Trip>(&sql)
        .bind(trip_id)
        .fetch_optional(executor)
        .await
}

/// Insert a trip owned by `owner_id`
///
/// Any `owner_id` inside the payload is ignored.
pub async fn insert_trip<'e, E>(
    executor: E,
    owner_id: &str,
    payload: &TripCreate,
) -> Result<Trip, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!(
        "INSERT INTO trips (owner_id, title, start_date, duration, cities, style_tags, \
         settings, is_pinned, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, FALSE, ?) \
         RETURNING {}",
        TRIP_COLUMNS.replace("trips.", "")
    );

    sqlx::query_as::<_, Trip>(&sql)
        .bind(owner_id)
        .bind(&payload.title)
        .bind(payload.start_date)
        .bind(payload.duration)
        .bind(Json(&payload.cities))
        .bind(Json(&payload.style_tags))
        .bind(Json(&payload.settings))
        .bind(Utc::now())
        .fetch_one(executor)
        .await
}

/// Mark a trip pinned; returns the number of rows touched
pub async fn set_pinned<'e, E>(executor: E, trip_id: i64) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("UPDATE trips SET is_pinned = TRUE WHERE id = ?")
        .bind(trip_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

/// Record a favorite
///
/// A second favorite for the same pair fails with a primary-key violation.
pub async fn insert_favorite<'e, E>(
    executor: E,
    user_id: &str,
    trip_id: i64,
) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query("INSERT INTO user_favorites (user_id, trip_id, created_at) VALUES (?, ?, ?)")
        .bind(user_id)
        .bind(trip_id)
        .bind(Utc::now())
        .execute(executor)
        .await?;
    Ok(())
}

/// Remove a favorite; returns the number of rows deleted
pub async fn delete_favorite<'e, E>(
    executor: E,
    user_id: &str,
    trip_id: i64,
) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM user_favorites WHERE user_id = ? AND trip_id = ?")
        .bind(user_id)
        .bind(trip_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

/// Trips the user has favorited
pub async fn list_favorite_trips<'e, E>(executor: E, user_id: &str) -> Result<Vec<Trip>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!(
        "SELECT {} FROM trips \
         JOIN user_favorites ON user_favorites.trip_id = trips.id \
         WHERE user_favorites.user_id = ?",
        TRIP_COLUMNS
    );
    sqlx::query_as::<_, Trip>(&sql)
        .bind(user_id)
        .fetch_all(executor)
        .await
}
