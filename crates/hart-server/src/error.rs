//! HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hart_core::error::HartError;
use serde::Serialize;
use uuid::Uuid;

pub type ApiResult<T> = Result<T, ApiError>;

/// A status-coded error response with a short human-readable reason.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInner,
}

#[derive(Serialize)]
struct ErrorInner {
    code: &'static str,
    message: String,
    request_id: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorInner {
                code: self.code,
                message: self.message,
                request_id: Uuid::new_v4().to_string(),
            },
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<HartError> for ApiError {
    fn from(err: HartError) -> Self {
        let message = err.to_string();
        match err {
            HartError::NotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", message)
            }
            HartError::AlreadyExists { .. } => {
                Self::new(StatusCode::BAD_REQUEST, "ALREADY_EXISTS", message)
            }
            HartError::Validation { .. } => {
                Self::new(StatusCode::BAD_REQUEST, "VALIDATION", message)
            }
            HartError::AuthenticationFailed { reason } => {
                Self::new(StatusCode::UNAUTHORIZED, "UNAUTHENTICATED", reason)
            }
            HartError::AuthorizationDenied { reason } => {
                Self::new(StatusCode::FORBIDDEN, "FORBIDDEN", reason)
            }
            HartError::Store(_) | HartError::Crypto(_) | HartError::Internal(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL", message)
            }
        }
    }
}
