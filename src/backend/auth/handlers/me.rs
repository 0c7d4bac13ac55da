/**
 * Current User Handler
 *
 * GET /users/me
 *
 * The authentication gate has already resolved the bearer token; this
 * handler only shapes the profile for the response.
 */

use crate::backend::middleware::auth::CurrentUser;
use crate::backend::response::{success, ApiResponse};
use crate::shared::UserResponse;

/// Return the caller's profile (never the password hash)
pub async fn get_me(CurrentUser(user): CurrentUser) -> ApiResponse<UserResponse> {
    success(UserResponse::from(user))
}
