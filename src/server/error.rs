//! API error type and its mapping onto HTTP responses. Handler-level misses
//! use the `{"message": ...}` shape; faults bubbled up from the service use
//! the `{"error", "statusCode", "timestamp"}` shape.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;

use crate::service::ServiceError;

#[derive(Debug)]
pub enum ApiError {
    /// 404 with a handler-provided message.
    NotFound(String),
    /// 400 for malformed requests caught at the handler.
    BadRequest(String),
    /// 400 for a failed service precondition (e.g. unknown combatant).
    Invalid(String),
    /// 500 for upstream/transport faults.
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) | Self::Invalid(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(message)
            | Self::BadRequest(message)
            | Self::Invalid(message)
            | Self::Internal(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidArgument(message) => Self::Invalid(message),
            ServiceError::Catalog(err) => Self::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::NotFound(message) | Self::BadRequest(message) => {
                serde_json::json!({ "message": message })
            }
            Self::Invalid(message) | Self::Internal(message) => {
                tracing::warn!(status = %status, error = %message, "request failed");
                serde_json::json!({
                    "error": message,
                    "statusCode": status.as_u16(),
                    "timestamp": Utc::now().to_rfc3339(),
                })
            }
        };
        (status, Json(body)).into_response()
    }
}
