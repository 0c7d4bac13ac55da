//! Account API integration tests
//!
//! Registration, login, `/users/me` and every authentication gate outcome,
//! driven through the full router.

#![cfg(feature = "ssr")]

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use chrono::Utc;
use jsonwebtoken::{decode, DecodingKey, Validation};
use pretty_assertions::assert_eq;
use serde_json::json;
use trip_planner::backend::auth::sessions::Claims;
use trip_planner::backend::middleware::AUTH_HEADER;
use trip_planner::shared::Settings;

use common::*;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/v1/user/register",
            None,
            Some(json!({
                "username": "ada@example.com",
                "password": "analytical",
                "full_name": "Ada Lovelace",
                "city": "London"
            })),
        )
        .await;

    let data = assert_success(status, &body);
    assert_eq!(body["msg"], "success");
    assert_eq!(data["username"], "ada@example.com");
    assert_eq!(data["full_name"], "Ada Lovelace");
    assert_eq!(data["gender"], "undisclosed");
    assert_eq!(data["is_active"], true);
    assert!(data.get("hashed_password").is_none());
    assert!(data.get("password").is_none());
}

#[tokio::test]
async fn test_register_rejects_non_email_username() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/v1/user/register",
            None,
            Some(json!({"username": "bob", "password": "pw"})),
        )
        .await;

    assert_failure(status, &body, StatusCode::NOT_ACCEPTABLE, "username bob format not valid");
    assert_eq!(app.db.count("users").await, 0);
}

#[tokio::test]
async fn test_register_twice() {
    let app = TestApp::new().await;
    let payload = json!({"username": "ada@example.com", "password": "analytical"});

    let (status, body) = app.post("/v1/user/register", None, Some(payload.clone())).await;
    assert_success(status, &body);

    let (status, body) = app.post("/v1/user/register", None, Some(payload)).await;
    assert_failure(
        status,
        &body,
        StatusCode::METHOD_NOT_ALLOWED,
        "User ada@example.com exists!",
    );
    assert_eq!(app.db.count("users").await, 1);
}

#[tokio::test]
async fn test_register_malformed_body() {
    let app = TestApp::new().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/user/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = app.send_request(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_login_issues_token() {
    let app = TestApp::new().await;
    let user = app.user("ada@example.com").await;

    let issued_at = Utc::now().timestamp();
    let (status, body) = app
        .post(
            "/v1/user/login",
            None,
            Some(json!({"username": user.username, "password": user.password})),
        )
        .await;

    let data = assert_success(status, &body);
    assert_eq!(data["token_type"], "bearer");

    let token = data["access_token"].as_str().unwrap();
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
        &Validation::default(),
    )
    .unwrap()
    .claims;

    assert_eq!(claims.username.as_deref(), Some("ada@example.com"));
    let expected_exp = issued_at + app.settings.access_token_expire_minutes * 60;
    let exp = claims.exp.unwrap();
    assert!((exp - expected_exp).abs() <= 5, "exp {} vs expected {}", exp, expected_exp);
}

#[tokio::test]
async fn test_login_unknown_username() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/v1/user/login",
            None,
            Some(json!({"username": "ghost@example.com", "password": "pw"})),
        )
        .await;

    assert_failure(status, &body, StatusCode::NOT_FOUND, "Unable to find this username");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    let user = app.user("ada@example.com").await;

    let (status, body) = app
        .post(
            "/v1/user/login",
            None,
            Some(json!({"username": user.username, "password": "not-the-password"})),
        )
        .await;

    assert_failure(status, &body, StatusCode::METHOD_NOT_ALLOWED, "Password doesn't match");
}

#[tokio::test]
async fn test_login_token_opens_me() {
    let app = TestApp::new().await;
    let user = app.user("ada@example.com").await;

    let (_, body) = app
        .post(
            "/v1/user/login",
            None,
            Some(json!({"username": user.username, "password": user.password})),
        )
        .await;
    let token = body["data"]["access_token"].as_str().unwrap().to_string();

    let (status, body) = app.get("/v1/users/me", Some(&token)).await;
    let data = assert_success(status, &body);
    assert_eq!(data["id"], user.id.as_str());
    assert_eq!(data["username"], "ada@example.com");
    assert!(data.get("hashed_password").is_none());
}

#[tokio::test]
async fn test_me_without_token() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/v1/users/me", None).await;
    assert_failure(status, &body, StatusCode::UNAUTHORIZED, "User not authenticated");
}

#[tokio::test]
async fn test_gate_rejects_non_bearer_header() {
    let app = TestApp::new().await;

    let request = Request::builder()
        .uri("/v1/users/me")
        .header(AUTH_HEADER, "Token abc")
        .body(Body::empty())
        .unwrap();
    let (status, body) = app.send_request(request).await;

    assert_failure(status, &body, StatusCode::UNAUTHORIZED, "Invalid token format");
}

#[tokio::test]
async fn test_gate_rejects_garbage_token() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/v1/users/me", Some("not.a.jwt")).await;
    assert_failure(status, &body, StatusCode::UNAUTHORIZED, "Invalid token");
}

#[tokio::test]
async fn test_gate_distinguishes_expired_from_invalid() {
    let app = TestApp::new().await;
    let user = app.user("ada@example.com").await;

    let expired = expired_token(&app.settings, &user.username);
    let (status, body) = app.get("/v1/users/me", Some(&expired)).await;
    assert_failure(status, &body, StatusCode::UNAUTHORIZED, "Token expired");

    let forged = Settings::builder()
        .secret_key("some-other-secret")
        .build()
        .unwrap();
    let invalid = generate_test_token(&forged, &user.username);
    let (status, body) = app.get("/v1/users/me", Some(&invalid)).await;
    assert_failure(status, &body, StatusCode::UNAUTHORIZED, "Invalid token");
}

#[tokio::test]
async fn test_gate_rejects_token_without_username() {
    let app = TestApp::new().await;

    let token = token_without_username(&app.settings);
    let (status, body) = app.get("/v1/users/me", Some(&token)).await;
    assert_failure(status, &body, StatusCode::UNAUTHORIZED, "Invalid token payload");
}

#[tokio::test]
async fn test_token_for_unknown_user() {
    let app = TestApp::new().await;

    // Open routes still work for an unresolved identity
    let token = generate_test_token(&app.settings, "ghost@example.com");
    let (status, body) = app.get("/v1/trips/list", Some(&token)).await;
    assert_success(status, &body);

    let (status, body) = app.get("/v1/users/me", Some(&token)).await;
    assert_failure(status, &body, StatusCode::UNAUTHORIZED, "User not found");
}

#[tokio::test]
async fn test_gate_errors_apply_to_open_routes() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/v1/trips/list", Some("not.a.jwt")).await;
    assert_failure(status, &body, StatusCode::UNAUTHORIZED, "Invalid token");
}

#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/v1/nowhere", None).await;
    assert_failure(status, &body, StatusCode::NOT_FOUND, "Not Found");
}
