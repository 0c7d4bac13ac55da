/**
 * Registration Handler
 *
 * POST /user/register
 *
 * # Registration Process
 *
 * 1. Check the username is email-shaped (406 otherwise)
 * 2. Check the username is free (405 otherwise)
 * 3. Hash the password with bcrypt
 * 4. Insert the user and return the stored profile
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::service::UserService;
use crate::backend::error::ApiResult;
use crate::backend::response::{success, ApiResponse};
use crate::shared::{UserCreate, UserResponse};

/// Registration handler
///
/// # Example Request
///
/// ```http
/// POST /v1/user/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "ada@example.com",
///   "password": "securepassword123",
///   "full_name": "Ada Lovelace"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "code": 0,
///   "msg": "success",
///   "data": {
///     "id": "6f1c0d4e9a7b4c1f8e2d3a5b6c7d8e9f",
///     "username": "ada@example.com",
///     "full_name": "Ada Lovelace",
///     "gender": "undisclosed",
///     "is_active": true,
///     ...
///   }
/// }
/// ```
pub async fn register(
    State(users): State<UserService>,
    payload: Result<Json<UserCreate>, JsonRejection>,
) -> ApiResult<ApiResponse<UserResponse>> {
    let Json(payload) = payload?;
    tracing::info!("Registration request for: {}", payload.username);

    let user = users.register(payload).await?;
    Ok(success(UserResponse::from(user)))
}
