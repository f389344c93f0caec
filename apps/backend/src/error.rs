//! Error handling for the backend API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use leitner_core::{ErrorKind, FlashcardError};
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] FlashcardError),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::Core(e) => match e.kind() {
                ErrorKind::Validation => (StatusCode::BAD_REQUEST, "validation_error"),
                ErrorKind::Range => (StatusCode::BAD_REQUEST, "range_error"),
                ErrorKind::NotFound => (StatusCode::NOT_FOUND, "not_found"),
            },
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        };

        tracing::debug!(error = %self, %status, "request failed");

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
