//! HTTP error mapping.
//!
//! Service errors cross the HTTP boundary here: validation failures become
//! 400, lookup failures 404, store failures 500. The body shape is the same
//! for every error.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::observability::Logger;
use crate::service::ServiceError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the HTTP layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Application logic failure
    #[error("{0}")]
    Service(#[from] ServiceError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Service(err) => match err {
                // 400 Bad Request: the request referenced a missing row
                ServiceError::StudentRefMissing(_) | ServiceError::GradeRefMissing(_) => {
                    StatusCode::BAD_REQUEST
                }

                // 404 Not Found
                ServiceError::StudentNotFound(_)
                | ServiceError::CourseNotFound { .. }
                | ServiceError::CourseNotGraded { .. } => StatusCode::NOT_FOUND,

                // 500 Internal Server Error
                ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

/// Error response body
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
        let body = ErrorResponse::from(&self);
        if status.is_server_error() {
            Logger::error("REQUEST_FAILED", &[("error", &body.error)]);
        }
        (status, Json(body)).into_response()
    }
}
