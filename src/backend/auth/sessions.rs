/**
 * Access Tokens
 *
 * Issues and decodes the HMAC-signed JWTs presented in the
 * `X-Forwarded-User` header.
 *
 * # Claims
 *
 * - `username` - login identifier of the holder
 * - `exp` - expiry, seconds since the Unix epoch
 *
 * Expiry is checked here rather than by `jsonwebtoken`, so an expired
 * token is reported as `Token expired` and never as `Invalid token`.
 */

use std::collections::HashSet;
use std::str::FromStr;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::error::ApiError;
use crate::shared::Settings;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// Why a token was rejected
#[derive(Debug, Error)]
pub enum TokenError {
    /// Bad signature, malformed structure or wrong algorithm
    #[error("Invalid token")]
    Invalid,

    #[error("Token expired")]
    Expired,

    /// Decoded fine but carries no `username`
    #[error("Invalid token payload")]
    MissingUsername,

    #[error("unsupported signing algorithm: {0}")]
    Algorithm(String),

    #[error("failed to sign token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Invalid | TokenError::Expired | TokenError::MissingUsername => {
                ApiError::handler(StatusCode::UNAUTHORIZED, err.to_string())
            }
            TokenError::Algorithm(_) | TokenError::Signing(_) => ApiError::internal(err.to_string()),
        }
    }
}

fn algorithm(settings: &Settings) -> Result<Algorithm, TokenError> {
    Algorithm::from_str(&settings.algorithm)
        .map_err(|_| TokenError::Algorithm(settings.algorithm.clone()))
}

/// Create a signed access token for `username` valid for `ttl`
pub fn create_access_token(
    username: &str,
    ttl: Duration,
    settings: &Settings,
) -> Result<String, TokenError> {
    let claims = Claims {
        username: Some(username.to_string()),
        exp: Some((Utc::now() + ttl).timestamp()),
    };
    sign_claims(&claims, settings)
}

/// Sign arbitrary claims with the configured secret and algorithm
pub fn sign_claims(claims: &Claims, settings: &Settings) -> Result<String, TokenError> {
    let header = Header::new(algorithm(settings)?);
    let key = EncodingKey::from_secret(settings.secret_key.as_bytes());
    Ok(encode(&header, claims, &key)?)
}

/// Decode a token and check its expiry and payload
///
/// Returns the username the token was issued to.
pub fn decode_access_token(token: &str, settings: &Settings) -> Result<String, TokenError> {
    let mut validation = Validation::new(algorithm(settings)?);
    validation.validate_exp = false;
    validation.required_spec_claims = HashSet::new();

    let key = DecodingKey::from_secret(settings.secret_key.as_bytes());
    let claims = decode::<Claims>(token, &key, &validation)
        .map_err(|e| {
            tracing::debug!("Token decode failed: {:?}", e);
            TokenError::Invalid
        })?
        .claims;

    if let Some(exp) = claims.exp {
        if Utc::now().timestamp() > exp {
            return Err(TokenError::Expired);
        }
    }

    claims.username.ok_or(TokenError::MissingUsername)
}
