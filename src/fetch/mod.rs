//! Product page fetching.
//!
//! A single GET per scrape: no retries, redirects per the client's default
//! policy, and the client-wide timeout from the config.

mod headers;
mod url_validation;

use std::sync::Arc;

use log::debug;

use crate::config::MAX_RESPONSE_BODY_SIZE;
use crate::error_handling::TransportError;

use headers::RequestHeaders;
pub use url_validation::validate_and_normalize_url;

/// Fetches product pages over HTTP.
///
/// Cheap to clone; all clones share one `reqwest::Client` and its connection
/// pool.
#[derive(Clone)]
pub struct PageFetcher {
    client: Arc<reqwest::Client>,
    max_body_size: usize,
}

impl PageFetcher {
    /// Wraps `client` with the default body limit.
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self {
            client,
            max_body_size: MAX_RESPONSE_BODY_SIZE,
        }
    }

    /// Overrides the response body limit.
    pub fn with_max_body_size(mut self, max_body_size: usize) -> Self {
        self.max_body_size = max_body_size;
        self
    }

    /// Fetches `url` and returns the decoded body text.
    ///
    /// # Errors
    ///
    /// - `TransportError::InvalidUrl` if the URL fails validation
    /// - `TransportError::Status` for a non-2xx response
    /// - `TransportError::Request` for network, timeout and decode failures
    /// - `TransportError::BodyTooLarge` past the body limit
    pub async fn fetch(&self, url: &str) -> Result<String, TransportError> {
        let url = validate_and_normalize_url(url)?;
        debug!("Fetching {}", url);

        let mut response = RequestHeaders::apply_to_request_builder(self.client.get(&url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status { status });
        }

        if let Some(length) = response.content_length() {
            if length > self.max_body_size as u64 {
                return Err(TransportError::BodyTooLarge {
                    limit: self.max_body_size,
                });
            }
        }

        // Content-Length is absent for chunked bodies and counts compressed bytes;
        // the decoded stream is counted as it arrives
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if body.len() + chunk.len() > self.max_body_size {
                return Err(TransportError::BodyTooLarge {
                    limit: self.max_body_size,
                });
            }
            body.extend_from_slice(&chunk);
        }
        let body = String::from_utf8_lossy(&body).into_owned();

        debug!("Fetched {} ({} bytes, HTTP {})", url, body.len(), status);
        Ok(body)
    }
}
