//! Mapping of studio errors onto HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bookai_core::{BookaiError, ValidationError};
use serde_json::json;
use thiserror::Error;

/// Errors returned by handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Studio(#[from] BookaiError),

    #[error("creation already in progress")]
    Busy,
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Studio(e.into())
    }
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, Vec<serde_json::Value>) {
        match self {
            ApiError::Studio(BookaiError::Validation(ValidationError::MissingFields(fields))) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                fields
                    .iter()
                    .map(|f| json!({ "field": f.as_str(), "error": "required" }))
                    .collect(),
            ),
            ApiError::Studio(BookaiError::Validation(ValidationError::ChaptersOutOfRange(_))) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                vec![json!({ "field": "chapters", "error": "out_of_range" })],
            ),
            ApiError::Studio(BookaiError::Validation(ValidationError::UnknownGenre(_))) => (
                StatusCode::BAD_REQUEST,
                "bad_request",
                vec![json!({ "field": "genre", "error": "unknown" })],
            ),
            ApiError::Studio(BookaiError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "not_found", Vec::new())
            }
            ApiError::Studio(BookaiError::Generation(_)) => {
                (StatusCode::BAD_GATEWAY, "generation_failed", Vec::new())
            }
            ApiError::Studio(BookaiError::Export(_)) => {
                (StatusCode::BAD_GATEWAY, "export_failed", Vec::new())
            }
            ApiError::Busy => (StatusCode::CONFLICT, "conflict", Vec::new()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, details) = self.parts();
        let message = match &self {
            ApiError::Studio(BookaiError::Validation(e)) => e.user_message(),
            other => other.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(code, status = status.as_u16(), %message, "request failed");
        } else {
            tracing::debug!(code, status = status.as_u16(), %message, "request rejected");
        }

        let body = json!({
            "error": {
                "code": code,
                "message": message,
                "details": details,
            }
        });

        (status, Json(body)).into_response()
    }
}
