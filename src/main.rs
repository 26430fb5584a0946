mod api;
mod config;
mod ratings;
mod repository;

use crate::api::{health_handler, AppState};
use crate::config::AppConfig;
use crate::ratings::{GrpcRatingsClient, RatingsClient};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("🚀 Starting Reviews API Server");

    // Load configuration
    let config = AppConfig::load()?;
    info!("📋 Configuration loaded");
    info!("   - Ratings enabled: {}", config.ratings_enabled);
    info!("   - Star color: {}", config.star_color);
    info!("   - Ratings service: {}", config.ratings_service);

    // The ratings client is only wired up when enrichment is enabled
    let ratings: Option<Arc<dyn RatingsClient>> = config.ratings_enabled.then(|| {
        Arc::new(GrpcRatingsClient::new(config.ratings_service.clone())) as Arc<dyn RatingsClient>
    });

    // Create application state
    let state = AppState {
        ratings,
        star_color: config.star_color.clone(),
    };

    // Build router with modular routes
    let app = Router::new()
        .route("/health", get(health_handler))
        .merge(api::reviews::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET /health        - Health check");
    info!("   GET /reviews/{{id}}  - Reviews for a product");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}
