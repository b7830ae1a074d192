//! Bot status API
//!
//! - GET /api/bot/status - Get the bot's current state
//! - POST /api/bot/status - Apply a control action (`{"action": "start" | "pause" | "stop"}`)

use axum::{body::Bytes, extract::State, routing::get, Json, Router};

use crate::api::ApiResponse;
use crate::error::Result;
use crate::types::{BotControlRequest, BotState};
use crate::AppState;

/// Create the bot router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/bot/status", get(get_status).post(control))
}

async fn get_status(State(state): State<AppState>) -> Json<ApiResponse<BotState>> {
    Json(ApiResponse::new(state.bot.status()))
}

async fn control(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ApiResponse<BotState>>> {
    let request: BotControlRequest = serde_json::from_slice(&body)?;
    let bot_state = state.bot.apply_raw(request.action.as_deref())?;
    Ok(Json(ApiResponse::new(bot_state)))
}
