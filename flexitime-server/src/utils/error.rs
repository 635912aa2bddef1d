//! Unified error handling
//!
//! [`AppError`] is the only error type a handler returns. Each variant maps
//! to exactly one HTTP status:
//!
//! | Variant | Status | Raised when |
//! |---------|--------|-------------|
//! | `Validation` | 400 | required field missing, no updatable field |
//! | `Invalid` | 400 | request body could not be parsed |
//! | `NotFound` | 404 | unknown or malformed id, unmatched route |
//! | `Database` | 500 | any store failure or constraint violation |
//!
//! Responses carry the status only. The message stays in the logs and is
//! never sent to the caller.
//!
//! ```ignore
//! Err(AppError::not_found(format!("Employee {} not found", id)))
//! ```

use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::db::repository::RepoError;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Client errors (4xx) ==========
    #[error("Validation failed: {0}")]
    /// Validation failed (400)
    Validation(String),

    #[error("Invalid request: {0}")]
    /// Malformed request body (400)
    Invalid(String),

    #[error("Resource not found: {0}")]
    /// Resource not found (404)
    NotFound(String),

    // ========== Server errors (5xx) ==========
    #[error("Database error: {0}")]
    /// Database error (500)
    Database(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Invalid(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
            }
            other => debug!(%status, error = %other, "Request rejected"),
        }

        status.into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Invalid(rejection.body_text())
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::Invalid(rejection.body_text())
    }
}

/// Every repository failure reaching a handler through `?` is a store error.
/// Handlers that need 404 semantics map the error explicitly.
impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        AppError::Database(err.to_string())
    }
}
