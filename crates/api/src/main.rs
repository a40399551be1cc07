use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roomreel_api::config::ServerConfig;
use roomreel_api::router::build_app_router;
use roomreel_api::state::AppState;
use roomreel_core::reward::{RewardDrawer, DEFAULT_CATALOG};
use roomreel_store::memory::MemoryStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (development convenience).
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber with env-filter support.
    // Default: debug for our crates, info for everything else.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "roomreel_api=debug,roomreel_store=debug,tower_http=debug,info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(ServerConfig::from_env());
    tracing::info!(
        host = %config.host,
        port = config.port,
        "Starting RoomReel API server"
    );

    let store = Arc::new(MemoryStore::with_default_challenges());
    let drawer = Arc::new(RewardDrawer::new(DEFAULT_CATALOG.to_vec())?);

    let state = AppState {
        store,
        config: config.clone(),
        drawer,
    };

    let app = build_app_router(state, &config);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down cleanly");
    Ok(())
}

/// Resolves when the process receives SIGINT (Ctrl+C) or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
