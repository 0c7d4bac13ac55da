/**
 * User Service
 *
 * Registration and login on top of the `users` queries, the password
 * hasher and the token issuer.
 *
 * # Failure Statuses
 *
 * - 406 - username is not email-shaped
 * - 405 - username already registered, or wrong password
 * - 404 - login with an unknown username
 */

use std::sync::Arc;

use chrono::Duration;
use sqlx::SqlitePool;

use crate::backend::auth::passwords::{hash_password, verify_password};
use crate::backend::auth::sessions::create_access_token;
use crate::backend::auth::users::{create_user, find_users_by_username, get_user_by_username};
use crate::backend::error::{ApiError, ApiResult};
use crate::backend::server::config::begin_write;
use crate::shared::user::validate_username;
use crate::shared::{Settings, Token, UserCreate, UserLogin, UserProfile};

#[derive(Clone)]
pub struct UserService {
    pool: SqlitePool,
    settings: Arc<Settings>,
}

fn user_exists(username: &str) -> ApiError {
    ApiError::method_not_allowed(format!("User {} exists!", username))
}

impl UserService {
    pub fn new(pool: SqlitePool, settings: Arc<Settings>) -> Self {
        Self { pool, settings }
    }

    /// Register a new account and return the persisted profile
    pub async fn register(&self, payload: UserCreate) -> ApiResult<UserProfile> {
        validate_username(&payload.username)?;

        if !find_users_by_username(&self.pool, &payload.username).await?.is_empty() {
            tracing::warn!("Registration rejected, username taken: {}", payload.username);
            return Err(user_exists(&payload.username));
        }

        let hashed = hash_password(&payload.password, self.settings.bcrypt_cost)?;

        let mut tx = begin_write(&self.pool).await?;
        let user = match create_user(&mut *tx, &payload, &hashed).await {
            Ok(user) => user,
            // Lost a race with a concurrent registration
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                tracing::warn!("Registration raced on username: {}", payload.username);
                return Err(user_exists(&payload.username));
            }
            Err(e) => return Err(e.into()),
        };
        tx.commit().await?;

        tracing::info!("User registered: {} ({})", user.username, user.id);
        Ok(user)
    }

    /// Verify credentials and issue an access token
    pub async fn login(&self, payload: UserLogin) -> ApiResult<Token> {
        let user = get_user_by_username(&self.pool, &payload.username)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Login for unknown username: {}", payload.username);
                ApiError::not_found("Unable to find this username")
            })?;

        if !verify_password(&payload.password, &user.hashed_password)? {
            tracing::warn!("Invalid password for user: {}", user.username);
            return Err(ApiError::method_not_allowed("Password doesn't match"));
        }

        let ttl = Duration::minutes(self.settings.access_token_expire_minutes);
        let token = create_access_token(&user.username, ttl, &self.settings)?;

        tracing::info!("User logged in: {}", user.username);
        Ok(Token::bearer(token))
    }
}
