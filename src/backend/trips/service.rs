/**
 * Trip Service
 *
 * Listing, creation, pinning and favorites.
 *
 * Every mutation runs in one transaction that takes the write lock up
 * front, so a concurrent duplicate waits and then sees the committed row.
 * Returning early with an error drops the transaction, which rolls it
 * back; domain errors keep their status, persistence errors surface as
 * 500 `Database error`.
 */

use sqlx::SqlitePool;

use crate::backend::error::{ApiError, ApiResult};
use crate::backend::server::config::begin_write;
use crate::backend::trips::db;
use crate::shared::{TripCreate, TripListQuery, TripResponse, UserProfile};

pub const TRIP_NOT_FOUND: &str = "Trip not found";

#[derive(Clone)]
pub struct TripService {
    pool: SqlitePool,
}

/// Trip IDs arrive as path text; anything non-numeric cannot name a trip
fn parse_trip_id(trip_id: &str) -> ApiResult<i64> {
    trip_id.parse::<i64>().map_err(|_| {
        tracing::warn!("Non-numeric trip id: {}", trip_id);
        ApiError::not_found(TRIP_NOT_FOUND)
    })
}

impl TripService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All trips, optionally filtered and sorted
    pub async fn list(&self, query: &TripListQuery) -> ApiResult<Vec<TripResponse>> {
        let filter = query.filter();
        let trips = db::list_trips(&self.pool, filter.as_ref(), query.sort()).await?;
        Ok(trips.into_iter().map(TripResponse::from).collect())
    }

    /// Create a trip owned by `caller`
    pub async fn create(&self, payload: TripCreate, caller: &UserProfile) -> ApiResult<TripResponse> {
        payload.validate()?;

        if let Some(requested) = payload.owner_id.as_deref() {
            if requested != caller.id {
                tracing::warn!(
                    "Ignoring owner_id {} in trip payload from {}",
                    requested,
                    caller.username
                );
            }
        }

        let mut tx = begin_write(&self.pool).await?;
        let trip = db::insert_trip(&mut *tx, &caller.id, &payload).await?;
        tx.commit().await?;

        tracing::info!("Trip {} created by {}", trip.id, caller.username);
        Ok(trip.into())
    }

    /// Pin a trip; pinning twice is not an error
    pub async fn pin(&self, trip_id: &str) -> ApiResult<()> {
        let id = parse_trip_id(trip_id)?;

        let mut tx = begin_write(&self.pool).await?;
        if db::set_pinned(&mut *tx, id).await? == 0 {
            tracing::warn!("Pin requested for missing trip {}", id);
            return Err(ApiError::not_found(TRIP_NOT_FOUND));
        }
        tx.commit().await?;

        tracing::info!("Trip {} pinned", id);
        Ok(())
    }

    /// Add a trip to the caller's favorites
    pub async fn favorite(&self, trip_id: &str, caller: &UserProfile) -> ApiResult<()> {
        let id = parse_trip_id(trip_id)?;

        let mut tx = begin_write(&self.pool).await?;
        if db::get_trip(&mut *tx, id).await?.is_none() {
            return Err(ApiError::not_found(TRIP_NOT_FOUND));
        }

        match db::insert_favorite(&mut *tx, &caller.id, id).await {
            Ok(()) => {}
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                tracing::warn!("{} already favorited trip {}", caller.username, id);
                return Err(ApiError::bad_request("Trip already favorited"));
            }
            Err(e) => return Err(e.into()),
        }
        tx.commit().await?;

        tracing::info!("{} favorited trip {}", caller.username, id);
        Ok(())
    }

    /// Remove a trip from the caller's favorites
    pub async fn unfavorite(&self, trip_id: &str, caller: &UserProfile) -> ApiResult<()> {
        let id = parse_trip_id(trip_id)?;

        let mut tx = begin_write(&self.pool).await?;
        if db::get_trip(&mut *tx, id).await?.is_none() {
            return Err(ApiError::not_found(TRIP_NOT_FOUND));
        }

        if db::delete_favorite(&mut *tx, &caller.id, id).await? == 0 {
            return Err(ApiError::bad_request("Trip not favorited"));
        }
        tx.commit().await?;

        tracing::info!("{} unfavorited trip {}", caller.username, id);
        Ok(())
    }

    /// Trips the caller has favorited
    pub async fn my_favorites(&self, caller: &UserProfile) -> ApiResult<Vec<TripResponse>> {
        let trips = db::list_favorite_trips(&self.pool, &caller.id).await?;
        Ok(trips.into_iter().map(TripResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_parse_trip_id() {
        assert_eq!(parse_trip_id("42").unwrap(), 42);

        let err = parse_trip_id("abc").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), TRIP_NOT_FOUND);
    }
}
