/**
 * Error Conversion
 *
 * `ApiError` implements `IntoResponse`, so handlers, extractors and the
 * authentication gate can all return it directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "code": 404,
 *   "error": "Trip not found"
 * }
 * ```
 *
 * The transport status equals `code`.
 */

use axum::response::{IntoResponse, Response};

use crate::backend::error::types::ApiError;
use crate::backend::response::failure;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        failure(self.status_code(), self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_error_renders_failure_envelope() {
        let response = ApiError::not_found("Trip not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"code": 404, "error": "Trip not found"}));
    }

    #[tokio::test]
    async fn test_database_error_renders_generic_message() {
        let response = ApiError::from(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Database error");
        assert_eq!(body["code"], 500);
    }
}
