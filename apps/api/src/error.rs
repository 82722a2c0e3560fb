//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the API                            │
//! │                                                                     │
//! │  Handler                                                            │
//! │  Result<T, ApiError>                                                │
//! │       │                                                             │
//! │       ├── ValidationError (bad qty/price) ──► 400 + message         │
//! │       │                                                             │
//! │       ├── DbError on header/list endpoints ─► 500, message masked   │
//! │       │                                       as "Internal server   │
//! │       │                                       error"                │
//! │       │                                                             │
//! │       └── DbError on item endpoints ────────► 400 + message         │
//! │                                                                     │
//! │  Body is always {"error": "<message>"}; the real cause is logged.   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The item endpoints deliberately report storage failures with 400 rather
//! than 500; that status split is part of the observed API contract.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use penjualan_core::ValidationError;

/// API error returned from HTTP handlers.
///
/// ## Serialization
/// This is what clients receive when a request fails:
/// ```json
/// { "error": "Invalid quantity or price. Check if the values are numeric." }
/// ```
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status for the response.
    pub status: StatusCode,

    /// Message placed in the `error` field of the body.
    pub message: String,
}

impl ApiError {
    /// Storage failure on a header/list endpoint: 500, cause masked.
    ///
    /// The underlying error is logged but never sent to the client.
    pub fn internal(err: impl std::fmt::Display) -> Self {
        error!(error = %err, "Internal server error");
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_string(),
        }
    }

    /// Failure on an item endpoint: 400, message surfaced verbatim.
    pub fn bad_request(err: impl std::fmt::Display) -> Self {
        let message = err.to_string();
        error!(error = %message, "Bad request");
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::bad_request(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
