//! Error types for the REST API.

use crate::db::StoreError;
use crate::validation::Violation;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

#[cfg(test)]
mod tests;

/// Maximum number of characters of a storage error surfaced to callers.
pub const MAX_STORAGE_ERROR_LEN: usize = 200;

/// API error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
    /// Error code.
    pub code: String,
}

/// Validation error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    /// Error message.
    pub error: String,
    /// Error code.
    pub code: String,
    /// Every field that failed its declared constraint.
    pub violations: Vec<Violation>,
}

/// API error types.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// One or more fields failed validation.
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(Vec<Violation>),

    /// The document store rejected the operation or is unreachable.
    #[error("storage failure: {0}")]
    Storage(String),

    /// Internal server error.
    #[error("internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(violations) => {
                let body = Json(ValidationErrorResponse {
                    error: "validation failed".to_string(),
                    code: "VALIDATION_FAILED".to_string(),
                    violations,
                });

                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }
            _ => {
                let (status, code) = match &self {
                    ApiError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
                    ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
                    ApiError::Validation(_) => unreachable!(),
                };

                let body = Json(ErrorResponse {
                    error: self.to_string(),
                    code: code.to_string(),
                });

                (status, body).into_response()
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Storage(truncate_message(&err.to_string(), MAX_STORAGE_ERROR_LEN))
    }
}

/// Truncates a message to at most `max_chars` characters.
#[must_use]
pub fn truncate_message(message: &str, max_chars: usize) -> String {
    if message.chars().count() <= max_chars {
        message.to_string()
    } else {
        message.chars().take(max_chars).collect()
    }
}
