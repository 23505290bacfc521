// Shared test helpers for spinning up the service.
//
// Each test gets its own router on an ephemeral port, so tests never share
// counters or listeners.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use product_importer::{build_router, AppState, Config, PageFetcher};

/// The synthetic product page used across tests.
#[allow(dead_code)] // Used by other test files
pub const PRODUCT_PAGE: &str = include_str!("fixtures/product_page.html");

/// Config for a test server serving static files from `static_dir`.
#[allow(dead_code)] // Used by other test files
pub fn test_config(static_dir: &Path) -> Config {
    Config {
        allowed_origins: vec!["http://localhost:5173".to_string()],
        static_dir: static_dir.to_path_buf(),
        timeout_seconds: 5,
        ..Default::default()
    }
}

/// Starts the service on `127.0.0.1:0` and returns its base URL.
#[allow(dead_code)] // Used by other test files
pub async fn spawn_app(config: Config) -> String {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
        .expect("Failed to create HTTP client");
    let state = AppState::new(PageFetcher::new(Arc::new(client)));
    let app = build_router(state, &config).expect("Failed to build router");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Test server failed");
    });

    format!("http://{}", addr)
}

/// Creates a static directory holding an `index.html` and one asset.
#[allow(dead_code)] // Used by other test files
pub fn static_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::write(
        dir.path().join("index.html"),
        "<!doctype html><div id=\"root\">importer</div>",
    )
    .expect("Failed to write index.html");
    std::fs::create_dir(dir.path().join("assets")).expect("Failed to create assets dir");
    std::fs::write(dir.path().join("assets").join("app.js"), "console.log('app');")
        .expect("Failed to write asset");
    dir
}
