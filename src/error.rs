//! Error types for Bookshelf server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::response::MessageResponse;

/// Message sent to clients in place of store and internal failure details
pub const GENERIC_ERROR_MESSAGE: &str = "Error";

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message exposed to the caller. Store and internal details stay server-side.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg)
            | AppError::Duplicate(msg)
            | AppError::NotFound(msg)
            | AppError::Authentication(msg) => msg.clone(),
            AppError::Database(_) | AppError::Internal(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Every failure is reported as a `{success: false, message}` envelope with
/// status 200; clients branch on `success`, not on the status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
            }
            other => {
                tracing::debug!("Request rejected: {}", other);
            }
        }

        let body = Json(MessageResponse::failure(self.public_message()));

        (StatusCode::OK, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
