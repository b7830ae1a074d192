use omen::config::Config;
use omen::AppState;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "omen=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Starting Omen server on {}:{}", config.host, config.port);
    info!(
        "Signal history: {:?} scope, capacity {}",
        config.signals.scope, config.signals.history_capacity
    );

    let state = AppState::new(config);
    let addr = format!("{}:{}", state.config.host, state.config.port);
    let engine = state.signal_engine.clone();
    let app = omen::app(state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Omen server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutting down Omen server...");
        })
        .await?;

    engine.clear();
    info!("Omen server stopped");

    Ok(())
}
