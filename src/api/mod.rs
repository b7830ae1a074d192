pub mod bot;
pub mod health;
pub mod signals;

use crate::AppState;
use axum::Router;
use serde::Serialize;

/// Success envelope shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    /// Unix timestamp (milliseconds) of the response.
    pub timestamp: i64,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(signals::router())
        .merge(bot::router())
}
