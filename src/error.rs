use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Unified error type for store, service, and middleware failures.
///
/// Validation, not-found, and unauthorized messages travel to the client
/// verbatim as plain text. Internal faults are logged server-side with full
/// detail and replaced by a fixed body so nothing internal leaks.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client-supplied data violates a field or uniqueness rule (400).
    #[error("{0}")]
    Validation(String),
    /// The referenced id does not exist (404).
    #[error("{0}")]
    NotFound(String),
    /// Missing or invalid bearer token (401).
    #[error("{0}")]
    Unauthorized(String),
    /// Anything unanticipated (500).
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            AppError::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, message).into_response()
            }
            AppError::Internal(source) => {
                tracing::error!(error = ?source, "internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error." })),
                )
                    .into_response()
            }
        }
    }
}
