//! # HTTP API Errors
//!
//! Every error body has the same shape: `{ "message": "..." }`.
//! Server-side failures use a fixed message; their detail is only logged.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schema::ValidationError;
use crate::service::ServiceError;

/// Message returned when a submission cannot be stored
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit feedback";

/// Message returned when the feedback list cannot be read
pub const LIST_FAILED_MESSAGE: &str = "Failed to fetch feedback entries";

/// Message returned when counters cannot be collected
pub const METRICS_FAILED_MESSAGE: &str = "Failed to collect metrics";

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Payload failed the feedback schema
    #[error("{0}")]
    Validation(ValidationError),

    /// Body was not valid JSON or had the wrong content type
    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Unexpected failure; carries the client-facing message only
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    /// Classify a service failure, using `internal_message` for server faults
    pub fn from_service(err: ServiceError, internal_message: &'static str) -> Self {
        match err {
            ServiceError::Validation(details) => ApiError::Validation(details),
            ServiceError::Storage(_) => ApiError::Internal(internal_message),
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl From<&ApiError> for MessageResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(MessageResponse::from(&self));
        (status, body).into_response()
    }
}
