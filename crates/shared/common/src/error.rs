//! Unified error handling.
//!
//! Provides a single error type that renders as an Axum HTTP response.
//! Callers only ever see a status code and a generic message; upstream
//! details stay in the logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // External service errors
    #[error("Upstream call failed: {message}")]
    Upstream {
        /// HTTP status returned by the provider, if one was obtained
        status: Option<u16>,
        message: String,
    },
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::Upstream { .. } => "UPSTREAM_ERROR",
        }
    }

    /// Get HTTP status code
    ///
    /// Every upstream failure collapses into a generic server error,
    /// including a provider-side 404.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Upstream { status, message } => {
                match status {
                    Some(code) => tracing::error!("Upstream error (status {}): {}", code, message),
                    None => tracing::error!("Upstream error: {}", message),
                }
                "A service communication error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn upstream(status: Option<u16>, msg: impl Into<String>) -> Self {
        AppError::Upstream {
            status,
            message: msg.into(),
        }
    }
}
