//! API error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced to HTTP clients. The dialogue engine itself cannot fail
/// on user input, so the only errors left are request-shape problems.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Message not found.")]
    MissingMessage,

    #[error("Session not found")]
    SessionNotFound,
}

impl ApiError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::MissingMessage => StatusCode::BAD_REQUEST,
            Self::SessionNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
