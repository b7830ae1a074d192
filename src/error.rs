use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::{BotError, SignalError};

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Signal(#[from] SignalError),

    #[error(transparent)]
    Bot(#[from] BotError),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

impl AppError {
    /// HTTP status and client-facing message for this error.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Signal(e @ SignalError::InvalidInput(_)) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            AppError::Signal(e @ SignalError::ComputationError(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::Bot(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::SerdeJson(e) => (StatusCode::BAD_REQUEST, e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        let body = Json(json!({
            "success": false,
            "error": message,
            "status": status.as_u16(),
            "timestamp": chrono::Utc::now().timestamp_millis(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_client_error() {
        let err: AppError = SignalError::InvalidInput("price must be finite".to_string()).into();
        let (status, message) = err.status_and_message();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(message.contains("price must be finite"));
    }

    #[test]
    fn test_computation_error_is_server_error() {
        let err: AppError = SignalError::ComputationError("overflow".to_string()).into();
        assert_eq!(err.status_and_message().0, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_bot_error_is_client_error() {
        let err: AppError = BotError::MissingAction.into();
        let (status, message) = err.status_and_message();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Action parameter is required");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::NotFound("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
