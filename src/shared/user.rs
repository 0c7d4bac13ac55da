//! User Data Structures
//!
//! The persisted user profile plus the request and response bodies of the
//! `/user/*` and `/users/me` endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::shared::error::SharedError;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b$")
        .expect("email pattern is valid")
});

/// Token type label returned alongside every access token
pub const TOKEN_TYPE: &str = "bearer";

/// Whether a username looks like an email address
pub fn is_email_shaped(username: &str) -> bool {
    EMAIL_SHAPE.is_match(username)
}

/// Validate a username for registration
pub fn validate_username(username: &str) -> Result<(), SharedError> {
    if is_email_shaped(username) {
        Ok(())
    } else {
        Err(SharedError::MalformedUsername(username.to_string()))
    }
}

/// Gender stored on a profile
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
    #[default]
    Undisclosed,
}

/// User profile as stored in the `users` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserProfile {
    /// Opaque identifier (UUID v4, simple hex form)
    pub id: String,
    /// Login identifier, unique and email-shaped
    pub username: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    /// bcrypt hash; never serialized
    pub hashed_password: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Gender,
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Registration request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct UserCreate {
    /// Email-shaped username
    pub username: String,
    /// Plain password (hashed before storage)
    pub password: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UserLogin {
    pub username: String,
    pub password: String,
}

/// Issued access token
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

impl Token {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: TOKEN_TYPE.to_string(),
        }
    }
}

/// User response (without the password hash)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Gender,
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<UserProfile> for UserResponse {
    fn from(user: UserProfile) -> Self {
        Self {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            phone: user.phone,
            address: user.address,
            city: user.city,
            country: user.country,
            postal_code: user.postal_code,
            date_of_birth: user.date_of_birth,
            gender: user.gender,
            avatar_url: user.avatar_url,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_email_shaped_usernames() {
        assert!(is_email_shaped("alice@example.com"));
        assert!(is_email_shaped("first.last+trips@sub.example.co"));
        assert!(validate_username("bob_99@mail.org").is_ok());
    }

    #[test]
    fn test_rejects_malformed_usernames() {
        for username in ["alice", "alice@", "@example.com", "alice@example", "alice@example.c", "alice@example.c|m", "a b@example.com", ""] {
            assert!(!is_email_shaped(username), "{username} should be rejected");
        }
    }

    #[test]
    fn test_validate_username_names_offending_value() {
        let err = validate_username("nope").unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_gender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Undisclosed).unwrap(), "\"undisclosed\"");
        let gender: Gender = serde_json::from_str("\"female\"").unwrap();
        assert_eq!(gender, Gender::Female);
    }

    #[test]
    fn test_user_create_optional_fields_default() {
        let request: UserCreate =
            serde_json::from_str(r#"{"username":"a@b.io","password":"pw"}"#).unwrap();
        assert_eq!(request.username, "a@b.io");
        assert!(request.full_name.is_none());
        assert!(request.gender.is_none());
    }
}
