// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::store::client::StoreError;

/// HTTP error surface for the investment routes.
///
/// The asset-detail path deliberately collapses every failure - malformed
/// request body, store error - into one opaque internal error with no
/// machine-readable code. The summary-history path never reaches this type
/// at all: its store errors are swallowed at the repository into an empty
/// result list.
#[derive(Debug)]
pub enum ApiError {
    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::InternalServerError(msg) => msg,
        }
    }
}

// Convert lower-layer errors to ApiError: log the real cause, surface the
// generic message only.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        tracing::error!("store error: {}", err);
        ApiError::internal_server_error("internal server error")
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("failed to decode request body: {}", err);
        ApiError::internal_server_error("internal server error")
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(json!({ "error": self.message() }))).into_response()
    }
}
