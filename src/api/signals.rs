//! Signal API endpoints.
//!
//! - GET /api/ai/signals?symbol=&price= - Record a tick and get the resulting signal
//! - GET /api/ai/signals/history?symbol= - Get the price window for a symbol
//! - DELETE /api/ai/signals/history?symbol= - Reset one window, or all when no symbol is given

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::ApiResponse;
use crate::error::{AppError, Result};
use crate::services::SignalError;
use crate::types::{HistorySnapshot, TradingSignal};
use crate::AppState;

/// Query parameters for the signal endpoint.
///
/// Both fields arrive as raw strings so that missing and malformed values can
/// be reported with the same error envelope.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SignalQuery {
    pub symbol: Option<String>,
    pub price: Option<String>,
}

/// Query parameters for the history endpoints.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct HistoryQuery {
    pub symbol: Option<String>,
}

/// Windows dropped by a reset.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetResponse {
    pub symbols: Vec<String>,
}

/// Create the signals router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/ai/signals", get(generate_signal))
        .route(
            "/api/ai/signals/history",
            get(get_history).delete(reset_history),
        )
}

fn required<'a>(value: &'a Option<String>, message: &str) -> Result<&'a str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(message.to_string()))
}

/// Parse the tick from query parameters.
fn parse_tick(query: &SignalQuery) -> Result<(&str, f64)> {
    const MISSING: &str = "Symbol and price parameters are required";
    let symbol = required(&query.symbol, MISSING)?;
    let raw_price = required(&query.price, MISSING)?;
    let price = raw_price
        .parse::<f64>()
        .map_err(|_| AppError::BadRequest(format!("Price '{}' is not a number", raw_price)))?;
    Ok((symbol, price))
}

/// Record a tick and return the signal for it.
async fn generate_signal(
    State(state): State<AppState>,
    Query(query): Query<SignalQuery>,
) -> Result<Json<ApiResponse<TradingSignal>>> {
    let (symbol, price) = parse_tick(&query)?;

    match state.signal_engine.ingest(symbol, price) {
        Ok(signal) => {
            state.bot.observe_signal(&signal);
            Ok(Json(ApiResponse::new(signal)))
        }
        Err(e @ SignalError::ComputationError(_)) => {
            state.bot.report_error(e.to_string());
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Get the price window for a symbol.
async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<ApiResponse<HistorySnapshot>>> {
    let symbol = required(&query.symbol, "Symbol parameter is required")?;

    Ok(Json(ApiResponse::new(HistorySnapshot {
        symbol: symbol.to_string(),
        prices: state.signal_engine.history(symbol),
        capacity: state.signal_engine.capacity(),
        timestamp: chrono::Utc::now().timestamp_millis(),
    })))
}

/// Reset one window, or every window when no symbol is given.
async fn reset_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<ApiResponse<ResetResponse>>> {
    let engine = &state.signal_engine;

    let symbols = match query.symbol.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(symbol) => {
            if !engine.reset(symbol) {
                return Err(AppError::NotFound(format!(
                    "No price history for {}",
                    symbol
                )));
            }
            vec![engine.history_key(symbol)]
        }
        None => {
            let all = engine.tracked_symbols();
            engine.clear();
            all
        }
    };

    debug!("Reset price history: {:?}", symbols);
    Ok(Json(ApiResponse::new(ResetResponse { symbols })))
}
