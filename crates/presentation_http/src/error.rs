//! API error handling
//!
//! This API has no taxonomy to speak of: the only thing that can go
//! wrong past routing is a store-level query failure, which surfaces
//! as a 500 with a small JSON body. Unknown routes get axum's default
//! 404.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use infrastructure::PersistenceError;
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Self::Internal(message) = self;
        let body = ErrorResponse {
            error: message,
            code: "internal_error".to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        Self::Internal(err.to_string())
    }
}
