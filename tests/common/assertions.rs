//! Envelope assertions

use axum::http::StatusCode;
use serde_json::Value;

/// Assert a success envelope and return its `data`
pub fn assert_success(status: StatusCode, body: &Value) -> Value {
    assert_eq!(status, StatusCode::OK, "unexpected status, body: {}", body);
    assert_eq!(body["code"], 0, "unexpected code, body: {}", body);
    body["data"].clone()
}

/// Assert a failure envelope with the given status and message
pub fn assert_failure(status: StatusCode, body: &Value, expected: StatusCode, message: &str) {
    assert_eq!(status, expected, "unexpected status, body: {}", body);
    assert_eq!(body["code"], expected.as_u16(), "unexpected code, body: {}", body);
    assert_eq!(body["error"], message, "unexpected error, body: {}", body);
    assert!(body.get("data").is_none(), "failure carried data: {}", body);
}
