//! API error types and handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from client.
    BadRequest(String),
    /// Error from the tablescope library.
    Analysis(tablescope::TablescopeError),
}

impl ApiError {
    /// The error returned by every analysis route before a dataset exists.
    pub fn no_dataset() -> Self {
        ApiError::NotFound("No dataset loaded. POST a CSV file to /api/dataset first.".to_string())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Analysis(e) => (StatusCode::BAD_REQUEST, "analysis_error", e.to_string()),
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<tablescope::TablescopeError> for ApiError {
    fn from(err: tablescope::TablescopeError) -> Self {
        ApiError::Analysis(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Analysis(e) => write!(f, "Analysis error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}
