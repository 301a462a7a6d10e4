//! Application Error Types
//!
//! Centralized error handling with Axum integration. Every handler returns
//! `Result<_, AppError>`, so this is the one place where failures become
//! HTTP responses.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Body returned for any rejected request payload or path parameter.
pub const INVALID_DATA_MESSAGE: &str = "invalid data provided";

/// Body returned for any failure that is not the caller's fault.
pub const INTERNAL_ERROR_MESSAGE: &str = "an internal error occurred";

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body or path failed validation. The detail is logged only.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced entity does not exist. The message is returned verbatim.
    #[error("{0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            AppError::Validation(detail) => {
                tracing::debug!(%detail, "Rejected invalid request data");
                INVALID_DATA_MESSAGE.to_string()
            }
            AppError::NotFound(msg) => msg,
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        (status, message).into_response()
    }
}

/// Render a handler panic as a plain internal error.
///
/// Installed through `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(format!("handler panicked: {}", detail)).into_response()
}
