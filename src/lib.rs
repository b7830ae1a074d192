//! Omen - rule-based trading signal server for a single exchange pair

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod types;

use axum::Router;
use config::Config;
use services::{BotManager, SignalEngine};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub signal_engine: Arc<SignalEngine>,
    pub bot: Arc<BotManager>,
}

impl AppState {
    /// Build fresh services from configuration.
    pub fn new(config: Config) -> Self {
        let signal_engine = SignalEngine::new(&config.signals);
        Self {
            config: Arc::new(config),
            signal_engine,
            bot: BotManager::new(),
        }
    }
}

/// Build the HTTP application.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Re-export commonly used types
pub use types::*;
