use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::errors::PorticoError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let error_kind = match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::NotFound(_) => "not_found",
            ApiError::Internal(_) => "internal_error",
        };

        let message = match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) | ApiError::Internal(msg) => msg,
        };

        (status, Json(ErrorBody { error: error_kind, message })).into_response()
    }
}

impl From<PorticoError> for ApiError {
    fn from(err: PorticoError) -> Self {
        match err {
            PorticoError::Validation { message, .. } => ApiError::BadRequest(message),
            PorticoError::NotFound { resource_type, id } => {
                ApiError::NotFound(format!("{} with ID '{}' not found", resource_type, id))
            }
            // Serialization failures here mean stored rows failed to
            // decode (malformed request bodies are rejected by the JSON
            // extractor before reaching handlers), so the fault is ours.
            PorticoError::Serialization { context, .. } => ApiError::Internal(context),
            PorticoError::Database { context, .. } => ApiError::Internal(context),
            PorticoError::Config { message } | PorticoError::Internal { message } => {
                ApiError::Internal(message)
            }
            PorticoError::Io { context, .. } => ApiError::Internal(context),
        }
    }
}
