//! Authentication test helpers
//!
//! Settings tuned for tests (minimum bcrypt cost, fixed secret) and helpers
//! for creating users and tokens without going through HTTP.

use std::sync::Arc;

use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use trip_planner::backend::auth::service::UserService;
use trip_planner::backend::auth::sessions::{create_access_token, sign_claims, Claims};
use trip_planner::shared::{Settings, UserCreate};

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_PASSWORD: &str = "test_password_123";

/// Settings for tests
pub fn test_settings() -> Settings {
    Settings::builder()
        .secret_key(TEST_SECRET)
        .bcrypt_cost(4)
        .build()
        .expect("Failed to build test settings")
}

/// Test user credentials
pub struct TestUser {
    pub id: String,
    pub username: String,
    pub password: String,
    pub token: String,
}

/// Register a user directly through the service and issue a token
pub async fn create_test_user(pool: &SqlitePool, settings: &Settings, username: &str) -> TestUser {
    let users = UserService::new(pool.clone(), Arc::new(settings.clone()));
    let user = users
        .register(UserCreate {
            username: username.to_string(),
            password: TEST_PASSWORD.to_string(),
            ..Default::default()
        })
        .await
        .expect("Failed to create test user");

    TestUser {
        id: user.id,
        username: user.username.clone(),
        password: TEST_PASSWORD.to_string(),
        token: generate_test_token(settings, &user.username),
    }
}

/// A token valid for one hour
pub fn generate_test_token(settings: &Settings, username: &str) -> String {
    create_access_token(username, Duration::hours(1), settings).expect("Failed to generate test token")
}

/// A token that expired five minutes ago
pub fn expired_token(settings: &Settings, username: &str) -> String {
    create_access_token(username, Duration::minutes(-5), settings)
        .expect("Failed to generate expired token")
}

/// A correctly signed token without a `username` claim
pub fn token_without_username(settings: &Settings) -> String {
    let claims = Claims {
        username: None,
        exp: Some(Utc::now().timestamp() + 3600),
    };
    sign_claims(&claims, settings).expect("Failed to sign claims")
}

/// Value of the `X-Forwarded-User` header
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
