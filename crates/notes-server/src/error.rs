//! API error types with JSON responses.
//!
//! Every error body has a single `detail` key: a list of field errors for
//! 422, a message string otherwise.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use notes_core::ValidationErrors;
use serde::Serialize;

/// API error that can be returned from handlers and extractors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed body or path (422).
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Store error (500).
    #[error("storage error: {0}")]
    Store(#[from] notes_store::StoreError),
}

impl ApiError {
    /// Get the error code string for this error, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Store(_) => "STORAGE_ERROR",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse<T: Serialize> {
    pub detail: T,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        match self {
            Self::Validation(errors) => {
                tracing::warn!(code, %errors, "Rejected request");
                (status, Json(ErrorResponse { detail: errors })).into_response()
            }
            Self::NotFound(message) => {
                tracing::debug!(code, %message, "Resource not found");
                (status, Json(ErrorResponse { detail: message })).into_response()
            }
            Self::Store(e) => {
                tracing::error!(code, error = %e, "Store operation failed");
                (
                    status,
                    Json(ErrorResponse {
                        detail: "Internal Server Error",
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
