//! Error types for trackflow-hub
//!
//! Every workflow failure kind maps to a distinct status code and machine
//! code so the client can present a specific, human-readable message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// No session, or an invalid/expired token (401)
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// Authenticated but the role fails a precondition (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Missing or malformed required field (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Transition attempted from a non-pending state (409)
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Blob storage read/write failed (500)
    #[error("Storage failure: {0}")]
    Storage(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Generic error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<trackflow_common::Error> for ApiError {
    fn from(err: trackflow_common::Error) -> Self {
        use trackflow_common::Error;
        match err {
            Error::Unauthorized(msg) => ApiError::Forbidden(msg),
            Error::Validation(msg) => ApiError::Validation(msg),
            Error::InvalidState(msg) => ApiError::InvalidState(msg),
            Error::Storage(msg) => ApiError::Storage(msg),
            Error::NotFound(msg) => ApiError::NotFound(msg),
            Error::Database(e) => ApiError::Internal(format!("Database error: {}", e)),
            Error::Io(e) => ApiError::Internal(format!("IO error: {}", e)),
            Error::Config(msg) => ApiError::Internal(msg),
            Error::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::Unauthenticated(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHENTICATED", msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED", msg),
            ApiError::InvalidState(msg) => (StatusCode::CONFLICT, "INVALID_STATE", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::Storage(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_FAILURE", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
            ApiError::Other(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                err.to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
