//! Error types for the release counter
//!
//! Provides unified error handling using thiserror. Every variant renders as
//! the same JSON envelope `{error, status?, detail?}`.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, warn};

use crate::api::headers::{apply_cors, NO_STORE};
use crate::models::ErrorResponse;

// == App Error Enum ==
/// Unified error type for request handling.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed caller input
    #[error("{0}")]
    InvalidRequest(String),

    /// HTTP method other than GET or OPTIONS
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Non-success status from the GitHub API
    #[error("GitHub API request failed with status {status}")]
    Upstream { status: u16, detail: Value },

    /// Upstream call exceeded the configured timeout
    #[error("GitHub API request timed out")]
    UpstreamTimeout,

    /// Anything unclassified: network failures, decoding failures
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Upstream { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|code| *status != 0 && !code.is_success())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            AppError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn envelope(&self) -> ErrorResponse {
        match self {
            AppError::Upstream { detail, .. } => ErrorResponse {
                error: "GitHub API error".to_string(),
                status: Some(self.status_code().as_u16()),
                detail: Some(detail.clone()),
            },
            AppError::Internal(_) => ErrorResponse::new("Internal server error"),
            other => ErrorResponse::new(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::UpstreamTimeout
        } else {
            AppError::Internal(err.to_string())
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::Internal(msg) => error!("Request failed: {}", msg),
            AppError::Upstream { .. } | AppError::UpstreamTimeout => warn!("{}", self),
            _ => {}
        }

        let mut response = (status, Json(self.envelope())).into_response();
        let headers = response.headers_mut();
        apply_cors(headers);
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(NO_STORE));
        if matches!(self, AppError::MethodNotAllowed) {
            headers.insert(header::ALLOW, HeaderValue::from_static("GET, OPTIONS"));
        }
        response
    }
}

// == Result Type Alias ==
/// Convenience Result type for request handling.
pub type Result<T> = std::result::Result<T, AppError>;
