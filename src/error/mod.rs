// Error types for calculator-api
// Author: kelexine (https://github.com/kelexine)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use crate::models::ErrorBody;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid input: 'a' and 'b' must be integers")]
    InvalidOperands,

    #[error("Invalid input: 'x' must be an integer")]
    InvalidOperand,

    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Result is outside the 64-bit integer range")]
    Overflow,

    #[error("Missing 'width' or 'height' in JSON body")]
    MissingDimensions,

    #[error("Width and height must be integers")]
    NonIntegerDimensions,

    #[error("Invalid JSON format")]
    InvalidJson,

    #[error("Request body must be valid JSON")]
    BodyNotJson,

    #[error("Invalid path segment: {0}")]
    InvalidPath(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method {method} is not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidOperands
            | ApiError::InvalidOperand
            | ApiError::DivisionByZero
            | ApiError::Overflow
            | ApiError::MissingDimensions
            | ApiError::NonIntegerDimensions
            | ApiError::InvalidJson
            | ApiError::BodyNotJson
            | ApiError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Convert ApiError to HTTP responses for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Server-side failures keep their detail in the log, not the body
        let message = if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
            "Internal server error".to_string()
        } else {
            tracing::debug!("Rejected request: {}", self);
            self.to_string()
        };

        (status, axum::Json(ErrorBody { error: message })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
