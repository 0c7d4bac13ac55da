/**
 * API Routes
 *
 * # Routes
 *
 * ## Users
 * - `POST /user/register` - User registration
 * - `POST /user/login` - User login
 * - `GET /users/me` - Current user (requires authentication)
 *
 * ## Trips
 * - `GET /trips/list` - List, filter and sort trips
 * - `POST /trips/create` - Create a trip (requires authentication)
 * - `PUT /trips/{trip_id}/pin` - Pin a trip
 * - `POST /trips/{trip_id}/favorite` - Favorite a trip (requires authentication)
 * - `POST /trips/{trip_id}/unfavorite` - Unfavorite a trip (requires authentication)
 * - `POST /trips/favorite` - Caller's favorites (requires authentication)
 *
 * Paths are relative to the API prefix; `router::create_router` nests them.
 */

use axum::routing::{get, post, put};
use axum::Router;

use crate::backend::auth::{get_me, login, register};
use crate::backend::server::state::AppState;
use crate::backend::trips::handlers::{
    create_trip, favorite_trip, list_trips, my_favorites, pin_trip, unfavorite_trip,
};

/// Configure API routes
///
/// Authentication is not enforced here: the gate runs on every request and
/// handlers that need a caller take `CurrentUser`.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // User endpoints
        .route("/user/register", post(register))
        .route("/user/login", post(login))
        .route("/users/me", get(get_me))
        // Trip endpoints
        .route("/trips/list", get(list_trips))
        .route("/trips/create", post(create_trip))
        .route("/trips/favorite", post(my_favorites))
        .route("/trips/{trip_id}/pin", put(pin_trip))
        .route("/trips/{trip_id}/favorite", post(favorite_trip))
        .route("/trips/{trip_id}/unfavorite", post(unfavorite_trip))
}
