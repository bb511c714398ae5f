//! Error handling for the riego backend
//!
//! Every error is translated to JSON at the route boundary. Upstream and
//! internal failures map to a generic 500 body so provider details never
//! leak to the client; only mode validation maps to 400.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Non-success status or malformed body from an external provider
    #[error("Upstream service unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Bad request input, only surfaced by the ai-mode endpoint
    #[error("Validation error: {0}")]
    Validation(String),

    /// Remote classifier exceeded its bounded wait
    #[error("Classifier timeout: {0}")]
    Timeout(String),

    /// Missing or unusable configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::UpstreamUnavailable(_) | AppError::Timeout(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error processing your request".to_string(),
            ),
            AppError::Configuration(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server configuration error".to_string(),
            ),
            AppError::Internal(_) | AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
