//! Service error types with HTTP status code mapping.
//!
//! [`AppError`] is the central error type. Payload errors are answered
//! with the decoder's message as plain text; every other variant renders
//! a structured JSON body.

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// ```json
/// {
///   "error": {
///     "code": 3001,
///     "message": "persistence error: pool timed out while waiting for an open connection"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// | Code | Variant          | HTTP Status               |
/// |------|------------------|---------------------------|
/// | 1001 | `InvalidPayload` | 400 Bad Request           |
/// | 3000 | `Internal`       | 500 Internal Server Error |
/// | 3001 | `Persistence`    | 503 Service Unavailable   |
/// | 3002 | `Timeout`        | 504 Gateway Timeout       |
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    /// Request body could not be decoded into the expected shape.
    #[error("{0}")]
    InvalidPayload(String),

    /// Storage backend rejected the operation or was unreachable.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// A storage operation did not finish within its deadline.
    #[error("operation timed out after {} ms", .0.as_millis())]
    Timeout(Duration),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidPayload(_) => 1001,
            Self::Internal(_) => 3000,
            Self::Persistence(_) => 3001,
            Self::Timeout(_) => 3002,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Persistence(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let Self::InvalidPayload(message) = self {
            // String bodies are served as text/plain.
            return (status, message).into_response();
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
            },
        };
        (status, axum::Json(body)).into_response()
    }
}
