//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, TCP_CONNECT_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used to fetch product pages.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Overall timeout from the config, plus a fixed TCP connect timeout
/// - The client's default redirect policy
/// - gzip/brotli/deflate response decoding
///
/// The client is cheap to clone behind an `Arc` and is shared by all requests.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
