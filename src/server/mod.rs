//! HTTP server.
//!
//! Provides:
//! - `POST /scrape-product` - scrape one product page
//! - `GET /status` - JSON request counters
//! - everything else - the built client bundle from the static directory,
//!   falling back to its `index.html`

mod cors;
mod handlers;
mod types;

use std::path::Path;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::fetch::PageFetcher;
use crate::initialization::init_client;

pub use cors::cors_layer;
use handlers::{scrape_product_handler, status_handler};
pub use types::{AppState, ErrorResponse, StatusResponse};

/// Builds the application router.
///
/// # Errors
///
/// Returns an error if an allowed origin is not a valid header value.
pub fn build_router(state: AppState, config: &Config) -> Result<Router, InitializationError> {
    Ok(Router::new()
        .route("/scrape-product", post(scrape_product_handler))
        .route("/status", get(status_handler))
        .fallback_service(static_files(&config.static_dir))
        .layer(cors_layer(&config.allowed_origins)?)
        .with_state(state))
}

/// Files under `dir`; unknown paths get `index.html` so client-side routes resolve.
fn static_files(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}

/// Creates the HTTP client and serves until Ctrl+C.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the listen address is
/// invalid or in use, or the server fails.
pub async fn start_server(config: Config) -> anyhow::Result<()> {
    let client = init_client(&config).context("Failed to initialize HTTP client")?;
    let state = AppState::new(PageFetcher::new(client));
    let app = build_router(state, &config).context("Failed to build router")?;

    let addr = config
        .socket_addr()
        .with_context(|| format!("Invalid bind address '{}'", config.bind_address))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind server to {}", addr))?;

    log::info!("Server listening on http://{}/", addr);
    log::info!("  - Scrape: POST http://{}/scrape-product", addr);
    log::info!("  - Status: http://{}/status", addr);
    log::info!(
        "  - Static files: {} (allowed origins: {})",
        config.static_dir.display(),
        config.allowed_origins.join(", ")
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received, finishing in-flight requests");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_build_router_rejects_invalid_origin() {
        let config = Config {
            allowed_origins: vec!["http://bad\norigin".to_string()],
            ..Default::default()
        };
        let state = AppState::new(PageFetcher::new(Arc::new(reqwest::Client::new())));
        assert!(matches!(
            build_router(state, &config),
            Err(InitializationError::OriginError(_))
        ));
    }

    #[tokio::test]
    async fn test_start_server_rejects_bad_bind_address() {
        let config = Config {
            bind_address: "not-an-ip".to_string(),
            ..Default::default()
        };
        let err = start_server(config).await.unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid bind address"));
    }
}
