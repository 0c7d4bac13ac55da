/**
 * Login Handler
 *
 * POST /user/login
 *
 * # Authentication Process
 *
 * 1. Look up the user by username (404 if unknown)
 * 2. Verify the password with bcrypt (405 on mismatch)
 * 3. Issue an access token carrying `username` and `exp`
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::service::UserService;
use crate::backend::error::ApiResult;
use crate::backend::response::{success, ApiResponse};
use crate::shared::{Token, UserLogin};

/// Login handler
///
/// # Example Request
///
/// ```http
/// POST /v1/user/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "ada@example.com",
///   "password": "securepassword123"
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
///     "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///     "token_type": "bearer"
///   }
/// }
/// ```
pub async fn login(
    State(users): State<UserService>,
    payload: Result<Json<UserLogin>, JsonRejection>,
) -> ApiResult<ApiResponse<Token>> {
    let Json(payload) = payload?;
    tracing::info!("Login request for: {}", payload.username);

    let token = users.login(payload).await?;
    Ok(success(token))
}
