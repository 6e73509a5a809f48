//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jokes::JokeError;
use thiserror::Error;

/// API-level error type that maps to HTTP responses.
///
/// Every error is rendered as `{"detail": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Joke selection failed.
    #[error(transparent)]
    Joke(#[from] JokeError),

    /// The request body is not a JSON object.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// The request declared a content type other than JSON.
    #[error("Unsupported content type: {0}")]
    UnsupportedMediaType(String),
}

impl ApiError {
    /// Returns the HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Joke(JokeError::InvalidCategory { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Joke(JokeError::NoCategories | JokeError::NoJokes(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(error = %message, "internal server error");
        } else {
            tracing::debug!(%status, error = %message, "request rejected");
        }

        let body = serde_json::json!({ "detail": message });
        (status, axum::Json(body)).into_response()
    }
}
