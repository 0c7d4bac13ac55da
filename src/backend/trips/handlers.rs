//! Trip HTTP Handlers
//!
//! Thin wrappers over `TripService`. Handlers that need a caller take
//! `CurrentUser`; the rest are open.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use crate::backend::error::ApiResult;
use crate::backend::middleware::auth::CurrentUser;
use crate::backend::response::{success, success_with_msg, ApiResponse};
use crate::backend::trips::service::TripService;
use crate::shared::{TripCreate, TripListQuery, TripResponse};

/// GET /trips/list
pub async fn list_trips(
    State(trips): State<TripService>,
    query: Result<Query<TripListQuery>, QueryRejection>,
) -> ApiResult<ApiResponse<Vec<TripResponse>>> {
    let Query(query) = query?;
    tracing::info!("Trip list requested: {:?}", query);

    Ok(success(trips.list(&query).await?))
}

/// POST /trips/create
pub async fn create_trip(
    State(trips): State<TripService>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<TripCreate>, JsonRejection>,
) -> ApiResult<ApiResponse<TripResponse>> {
    let Json(payload) = payload?;
    tracing::info!("{} requested trip create: {}", user.username, payload.title);

    Ok(success(trips.create(payload, &user).await?))
}

/// PUT /trips/{trip_id}/pin
pub async fn pin_trip(
    State(trips): State<TripService>,
    Path(trip_id): Path<String>,
) -> ApiResult<ApiResponse<bool>> {
    trips.pin(&trip_id).await?;
    Ok(success_with_msg(true, "Trip pinned successfully"))
}

/// POST /trips/{trip_id}/favorite
pub async fn favorite_trip(
    State(trips): State<TripService>,
    CurrentUser(user): CurrentUser,
    Path(trip_id): Path<String>,
) -> ApiResult<ApiResponse<bool>> {
    trips.favorite(&trip_id, &user).await?;
    Ok(success_with_msg(true, "Trip favorited successfully"))
}

/// POST /trips/{trip_id}/unfavorite
pub async fn unfavorite_trip(
    State(trips): State<TripService>,
    CurrentUser(user): CurrentUser,
    Path(trip_id): Path<String>,
) -> ApiResult<ApiResponse<bool>> {
    trips.unfavorite(&trip_id, &user).await?;
    Ok(success_with_msg(true, "Trip unfavorited successfully"))
}

/// POST /trips/favorite
pub async fn my_favorites(
    State(trips): State<TripService>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<ApiResponse<Vec<TripResponse>>> {
    Ok(success(trips.my_favorites(&user).await?))
}
