//! Server state and response types.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::config::{SCRAPE_FAILED_MESSAGE, URL_REQUIRED_MESSAGE};
use crate::error_handling::{ProcessingStats, RequestError};
use crate::fetch::PageFetcher;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Shared page fetcher
    pub fetcher: PageFetcher,
    /// Request counters
    pub stats: Arc<ProcessingStats>,
    /// Server start, for uptime
    pub start_time: Arc<Instant>,
}

impl AppState {
    /// Fresh state with zeroed counters.
    pub fn new(fetcher: PageFetcher) -> Self {
        Self {
            fetcher,
            stats: Arc::new(ProcessingStats::new()),
            start_time: Arc::new(Instant::now()),
        }
    }
}

/// JSON error body: `{ "error": "..." }`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Client-facing message
    pub error: &'static str,
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            RequestError::Validation => (StatusCode::BAD_REQUEST, URL_REQUIRED_MESSAGE),
            RequestError::Scrape(_) => (StatusCode::INTERNAL_SERVER_ERROR, SCRAPE_FAILED_MESSAGE),
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// JSON response for `/status`
#[derive(Debug, Serialize)]
#[allow(missing_docs)]
pub struct StatusResponse {
    pub uptime_seconds: f64,
    pub total_requests: usize,
    pub succeeded: usize,
    pub validation_failures: usize,
    pub scrape_failures: usize,
    /// Scrape failures per category, keyed by snake_case category name
    pub errors: BTreeMap<&'static str, usize>,
}
