//! Static Bundle Server
//!
//! Serves the built frontend with Axum. Any path that is not a file in the
//! bundle falls back to `index.html`, so the client-side router can handle
//! deep links such as `/charts-and-maps`.
//!
//! # Endpoints
//!
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Status and version
//! - everything else - files from the bundle directory, else `index.html`

mod error;
mod health;

pub use error::ServerError;

use axum::{routing::get, Router};
use std::path::Path;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Build the router serving `dist_dir`
pub fn build_router(dist_dir: &Path) -> Router {
    let index = dist_dir.join("index.html");
    let bundle = ServeDir::new(dist_dir).fallback(ServeFile::new(index));

    let health_routes = Router::new()
        .route("/live", get(health::liveness))
        .route("/", get(health::status));

    Router::new()
        .nest("/health", health_routes)
        .fallback_service(bundle)
        .layer(TraceLayer::new_for_http())
}

/// Start the server and run until a shutdown signal
pub async fn serve(config: &ServerConfig) -> Result<(), ServerError> {
    let dist_dir = Path::new(&config.dist_dir);
    if !dist_dir.join("index.html").is_file() {
        return Err(ServerError::MissingBundle(dist_dir.to_path_buf()));
    }

    let router = build_router(dist_dir);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Outbreak serving {:?} on http://{}", dist_dir, addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Outbreak server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
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

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
