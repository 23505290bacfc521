//! Configuration constants.
//!
//! This module defines the constants used throughout the service, including
//! timeouts, size limits, and the messages returned to clients.

/// Default port the HTTP server listens on.
pub const DEFAULT_PORT: u16 = 4000;
/// Default bind address (all interfaces).
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
/// Default browser origin allowed by CORS (the SPA dev server).
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";
/// Default directory holding the prebuilt single-page application.
pub const DEFAULT_STATIC_DIR: &str = "client/dist";

// Network operation timeouts
/// Overall per-request timeout for the upstream fetch, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default User-Agent string for upstream requests.
///
/// Product pages frequently serve a stripped-down or captcha page to clients
/// that do not look like a desktop browser. Override with `--user-agent`.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Response and body size limits
/// Maximum upstream response body size in bytes (10MB)
/// Product pages routinely weigh 2-4MB; anything past this is refused.
pub const MAX_RESPONSE_BODY_SIZE: usize = 10 * 1024 * 1024;

/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Maximum error message length in characters when logging upstream failures.
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 2000;

// Client-facing error messages
/// Body of the 400 response when the request carries no URL.
pub const URL_REQUIRED_MESSAGE: &str = "URL is required";
/// Body of the 500 response for any fetch or parse failure.
pub const SCRAPE_FAILED_MESSAGE: &str = "Failed to fetch product data.";
