//! API error types and JSON error response formatting.
//!
//! Every failure is rendered as `{"error": "<message>"}` with a fixed,
//! endpoint-specific message. Internal faults are logged with full detail
//! but the underlying error never reaches the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use insight_core::error::InsightError;

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// API error type that maps to HTTP status codes and JSON responses.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request - the body failed validation.
    InvalidInput(&'static str),
    /// 404 Not Found - resource does not exist.
    NotFound(&'static str),
    /// 500 Internal Server Error - the store failed underneath the handler.
    Internal {
        message: &'static str,
        source: InsightError,
    },
}

impl ApiError {
    /// Adapter for `map_err` that tags a store fault with the endpoint's
    /// client-facing message.
    pub fn internal(message: &'static str) -> impl FnOnce(InsightError) -> ApiError {
        move |source| ApiError::Internal { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal { message, source } => {
                tracing::error!(error = %source, "{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = ErrorBody {
            error: message.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
