/**
 * Authentication Gate
 *
 * Runs on every request. A request without `X-Forwarded-User` passes
 * through anonymously; otherwise the header must read `Bearer <jwt>` and
 * the token must resolve to a stored user.
 *
 * # Outcomes
 *
 * - header absent → continue, no identity
 * - header without `Bearer ` → 401 `Invalid token format`
 * - undecodable token → 401 `Invalid token`
 * - past `exp` → 401 `Token expired`
 * - no `username` claim → 401 `Invalid token payload`
 * - username unknown → continue with `UnresolvedIdentity`
 * - username stored twice → 500 `Data inconsistency error`
 * - database failure → 500 `Database error`
 * - otherwise → continue with `AuthenticatedUser`
 *
 * Handlers that need a caller take the `CurrentUser` extractor, which turns
 * a missing identity into 401 `User not authenticated` and an unresolved
 * one into 401 `User not found`.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::decode_access_token;
use crate::backend::auth::users::{find_users_by_username, single_user};
use crate::backend::error::{ApiError, ApiResult};
use crate::backend::server::state::AppState;
use crate::shared::UserProfile;

/// Header carrying the bearer token
pub const AUTH_HEADER: &str = "x-forwarded-user";

/// Caller resolved from a valid token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser(pub UserProfile);

/// A valid token whose username matched no stored user
#[derive(Clone, Debug)]
pub struct UnresolvedIdentity {
    pub username: String,
}

enum Identity {
    Anonymous,
    Resolved(UserProfile),
    Unresolved(String),
}

/// Authentication middleware
///
/// Installed with `axum::middleware::from_fn_with_state`.
pub async fn auth_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    match resolve_identity(&state, request.headers()).await? {
        Identity::Anonymous => {}
        Identity::Resolved(user) => {
            tracing::debug!("Authenticated request from {}", user.username);
            request.extensions_mut().insert(AuthenticatedUser(user));
        }
        Identity::Unresolved(username) => {
            tracing::warn!("Token names unknown user: {}", username);
            request
                .extensions_mut()
                .insert(UnresolvedIdentity { username });
        }
    }

    Ok(next.run(request).await)
}

async fn resolve_identity(state: &AppState, headers: &HeaderMap) -> ApiResult<Identity> {
    let Some(value) = headers.get(AUTH_HEADER) else {
        return Ok(Identity::Anonymous);
    };

    let token = value
        .to_str()
        .ok()
        .filter(|v| v.starts_with("Bearer "))
        .map(|v| v.split(' ').nth(1).unwrap_or_default())
        .ok_or_else(|| {
            tracing::warn!("Malformed {} header", AUTH_HEADER);
            ApiError::unauthorized("Invalid token format")
        })?;

    let username = decode_access_token(token, &state.settings).map_err(|e| {
        tracing::warn!("Rejected token: {}", e);
        ApiError::from(e)
    })?;

    // The connection goes back to the pool before the handler runs
    let rows = {
        let mut conn = state.db.acquire().await?;
        find_users_by_username(&mut *conn, &username).await?
    };

    Ok(match single_user(rows, &username)? {
        Some(user) => Identity::Resolved(user),
        None => Identity::Unresolved(username),
    })
}

/// Axum extractor for the authenticated caller
#[derive(Clone, Debug)]
pub struct CurrentUser(pub UserProfile);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(AuthenticatedUser(user)) = parts.extensions.get::<AuthenticatedUser>() {
            return Ok(CurrentUser(user.clone()));
        }

        if parts.extensions.get::<UnresolvedIdentity>().is_some() {
            return Err(ApiError::unauthorized("User not found"));
        }

        tracing::warn!("Protected route called without a token: {}", parts.uri.path());
        Err(ApiError::unauthorized("User not authenticated"))
    }
}
