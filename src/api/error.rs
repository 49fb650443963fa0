//! API Error — HTTP status + client-readable message
//!
//! Every fallible handler returns `Result<_, ApiError>`; the error body is
//! always `{"error": "<message>"}`. Storage business errors carry their own
//! client-facing text and map straight onto statuses; anything unexpected
//! is logged and flattened to a generic 500 so internals never leak.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::storage::postgres::PostgresError;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse { error: self.message })).into_response()
    }
}

impl From<PostgresError> for ApiError {
    fn from(err: PostgresError) -> Self {
        match err {
            PostgresError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            PostgresError::Forbidden(msg) => Self::new(StatusCode::FORBIDDEN, msg),
            PostgresError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            other => {
                error!("Database operation failed: {}", other);
                Self::internal()
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_error_mapping() {
        let e: ApiError = PostgresError::NotFound("missing".into()).into();
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        assert_eq!(e.message, "missing");

        let e: ApiError = PostgresError::Forbidden("not yours".into()).into();
        assert_eq!(e.status, StatusCode::FORBIDDEN);

        let e: ApiError = PostgresError::Conflict("duplicate".into()).into();
        assert_eq!(e.status, StatusCode::CONFLICT);

        // Internal failures never leak their message
        let e: ApiError = PostgresError::Migration("boom".into()).into();
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.message, "Internal server error.");
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let resp = ApiError::bad_request("nope").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v["error"], "nope");
    }
}
