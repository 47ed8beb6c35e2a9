//! API error type for request handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::models::ResolveResponse;

/// Usage example echoed in every error payload.
pub const USAGE_EXAMPLE: &str = "?url=https://www.youtube.com/watch?v=VIDEO_ID";

/// Error returned to API callers as a structured `status: error` envelope.
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Missing or unusable caller input.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ResolveResponse::Error {
            message: self.message,
            example: USAGE_EXAMPLE.to_string(),
        };
        (self.status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
