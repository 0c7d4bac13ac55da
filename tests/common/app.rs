//! Request driver
//!
//! Builds the full router (gate, tracing and CORS layers included) over a
//! test database and sends requests through it with `oneshot`.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use trip_planner::backend::create_app_with_pool;
use trip_planner::backend::middleware::AUTH_HEADER;
use trip_planner::shared::Settings;

use super::auth_helpers::{auth_header, create_test_user, test_settings, TestUser};
use super::database::TestDatabase;

pub struct TestApp {
    pub db: TestDatabase,
    pub settings: Settings,
    router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_database(TestDatabase::new().await)
    }

    /// App over a file-backed database, for requests that run concurrently
    pub async fn with_file_database() -> Self {
        Self::with_database(TestDatabase::file().await)
    }

    fn with_database(db: TestDatabase) -> Self {
        let settings = test_settings();
        let router = create_app_with_pool(db.pool().clone(), settings.clone());
        Self { db, settings, router }
    }

    /// Register a user without going through HTTP
    pub async fn user(&self, username: &str) -> TestUser {
        create_test_user(self.db.pool(), &self.settings, username).await
    }

    /// Send a request and return the status and parsed JSON body
    ///
    /// An empty body parses as `Value::Null`.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(AUTH_HEADER, auth_header(token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send_request(request).await
    }

    /// Send a prebuilt request
    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
        self.send(Method::POST, uri, token, body).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, token, None).await
    }
}
