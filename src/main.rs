//! Shaban Server
//!
//! Japanese license plate recognition API: accepts base64-encoded plate
//! photos over HTTP, runs them through a configurable OCR backend, and
//! returns the plate's structured fields.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shaban_server::config::Config;
use shaban_server::ocr::OcrService;
use shaban_server::routes;
use shaban_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shaban_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing::info!("Starting Shaban Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Configured OCR engines: {:?}", config.ocr.engines);

    let addr = SocketAddr::new(
        config
            .server
            .host
            .parse()
            .context("Invalid SERVER_HOST address")?,
        config.server.port,
    );

    // Initialize the OCR service and report what is actually reachable
    let ocr = OcrService::from_config(&config.ocr);
    for (engine, available) in ocr.availability().await {
        tracing::info!("OCR engine {:?} available: {}", engine, available);
    }

    // Create application state (loads the region catalog, compiles patterns)
    let state = AppState::new(config, ocr).context("Failed to initialize application state")?;

    let app = routes::app(state);

    // Start server with graceful shutdown
    tracing::info!("Shaban Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind server address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown...");
        },
    }
}
