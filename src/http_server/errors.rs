//! # API Errors
//!
//! Maps service outcomes to HTTP status codes. Missing records map to
//! 204 No Content with an empty body; invalid payloads map to 400 with
//! an error body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::service::ServiceError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API boundary errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// No record for the requested VIN
    #[error("automobile not found")]
    NotFound,

    /// Create payload failed validation
    #[error("invalid automobile: {0}")]
    InvalidAuto(String),

    /// Request body could not be parsed
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// Storage or other internal failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NO_CONTENT,
            ApiError::InvalidAuto(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound { .. } => ApiError::NotFound,
            ServiceError::InvalidAuto(e) => ApiError::InvalidAuto(e.to_string()),
            ServiceError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

/// Error response body for 4xx/5xx answers that carry one
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // 204 must not carry a body.
        if status == StatusCode::NO_CONTENT {
            return status.into_response();
        }
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
