//! HTTP error mapping.
//!
//! Handlers return [`ApiResult`]. Absence from the service layer becomes
//! [`ApiError::NotFound`]; crate errors become a logged 500 with a generic body.

use crate::errors::Error;
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Realm advertised in `WWW-Authenticate` challenges.
pub const AUTH_REALM: &str = "employees";

/// `{"response": "..."}` payload used for every non-entity response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human readable outcome
    pub response: String,
}

impl MessageResponse {
    /// Wraps `message` in the response payload.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            response: message.into(),
        }
    }
}

/// Every failure a handler can report, mapped to a status code.
#[derive(Debug)]
pub enum ApiError {
    /// No active employee with the requested id
    NotFound,
    /// Missing, malformed or wrong credentials
    Unauthorized,
    /// Authenticated, but without the required role
    Forbidden,
    /// Request body or path could not be decoded
    BadRequest(String),
    /// Store or infrastructure failure, logged and reported as 500
    Internal(Error),
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self::Internal(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            Self::Forbidden => (StatusCode::FORBIDDEN, "Forbidden".to_string()),
            Self::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail),
            Self::Internal(e) => {
                tracing::error!(error = %e, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let mut response = (status, Json(MessageResponse::new(message))).into_response();
        if status == StatusCode::UNAUTHORIZED {
            let challenge = format!("Basic realm=\"{AUTH_REALM}\"");
            if let Ok(value) = HeaderValue::from_str(&challenge) {
                response.headers_mut().insert(header::WWW_AUTHENTICATE, value);
            }
        }
        response
    }
}

/// Result type returned by every handler.
pub type ApiResult<T> = Result<T, ApiError>;
