//! Error types for the Geosphere API layer.
//!
//! [`ApiError`] unifies handler failure modes into a single enum that
//! converts into an Axum HTTP response carrying the
//! `{"status":"error","message":...}` body. Handler panics are mapped to
//! the same shape by [`panic_response`].

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use geosphere_types::StatusResponse;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No route matches the request path.
    #[error("not found: {0}")]
    NotFound(String),

    /// A payload could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Serialization(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            Self::NotFound(msg) | Self::Internal(msg) => msg.clone(),
            Self::Serialization(e) => format!("JSON error: {e}"),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (status, axum::Json(StatusResponse::error(message))).into_response()
    }
}

/// Convert a caught handler panic into a 500 error response.
// `CatchPanicLayer::custom` hands over the payload by value.
#[allow(clippy::needless_pass_by_value)]
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| (*s).to_owned()))
        .unwrap_or_else(|| String::from("unknown panic payload"));

    tracing::error!(panic = %detail, "handler panicked");
    ApiError::Internal(String::from("internal server error")).into_response()
}
