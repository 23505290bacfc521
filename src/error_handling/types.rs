//! Error type definitions.
//!
//! This module defines the error types used throughout the service and the
//! categories under which upstream failures are counted.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use strum_macros::{EnumIter as EnumIterMacro, IntoStaticStr};
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// A configured CORS origin is not a valid header value.
    #[error("Invalid allowed origin '{0}'")]
    OriginError(String),
}

/// The document handed to the extractor could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input is empty or contains no markup at all.
    #[error("Input is not parseable markup ({length} bytes without a tag)")]
    NotMarkup {
        /// Length of the rejected input in bytes
        length: usize,
    },
}

/// Failures of the outbound page fetch.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The URL is syntactically invalid, too long, or not http(s).
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL as received
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// The upstream server answered with a non-2xx status.
    #[error("Upstream responded with HTTP {status}")]
    Status {
        /// Response status
        status: StatusCode,
    },

    /// The request itself failed (connect, timeout, decode, ...).
    #[error("{kind}: {source}")]
    Request {
        /// Failure category
        kind: ErrorType,
        /// Underlying client error
        source: ReqwestError,
    },

    /// The response body is larger than the configured limit.
    #[error("Response body exceeds {limit} bytes")]
    BodyTooLarge {
        /// Limit in bytes
        limit: usize,
    },
}

/// Why a scrape failed after the request passed validation.
#[derive(Error, Debug)]
pub enum ScrapeFailure {
    /// The page could not be fetched.
    #[error("fetch failed: {0}")]
    Transport(#[from] TransportError),

    /// The page body was not markup.
    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),
}

/// Errors returned by the request handler.
///
/// Only two messages ever reach the client; the wrapped cause is kept for
/// server-side logging.
#[derive(Error, Debug)]
pub enum RequestError {
    /// The request carried no usable URL.
    #[error("URL is required")]
    Validation,

    /// Fetching or parsing the product page failed.
    #[error("Failed to fetch product data.")]
    Scrape(#[source] ScrapeFailure),
}

impl From<TransportError> for RequestError {
    fn from(e: TransportError) -> Self {
        RequestError::Scrape(ScrapeFailure::Transport(e))
    }
}

impl From<ParseError> for RequestError {
    fn from(e: ParseError) -> Self {
        RequestError::Scrape(ScrapeFailure::Parse(e))
    }
}

/// Categories of scrape failures, used for logging and the `/status` counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[allow(missing_docs)]
pub enum ErrorType {
    // URL problems
    InvalidUrl,
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    // Upstream status codes
    HttpRequestBotDetectionError, // 403 Forbidden - typically bot detection
    HttpRequestNotFound,          // 404 Not Found
    HttpRequestTooManyRequests,   // 429 Too Many Requests
    HttpRequestServerError,       // any 5xx
    HttpRequestStatusError,       // any other non-2xx
    ResponseTooLarge,
    // Document errors
    DocumentParseError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Human-readable description of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::InvalidUrl => "Invalid URL",
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestBotDetectionError => "Bot detection (403 Forbidden)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestTooManyRequests => "Too many requests (429)",
            ErrorType::HttpRequestServerError => "Upstream server error (5xx)",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::ResponseTooLarge => "Response body too large",
            ErrorType::DocumentParseError => "Document parse error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SCRAPE_FAILED_MESSAGE, URL_REQUIRED_MESSAGE};
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_as_str() {
        assert_eq!(
            ErrorType::HttpRequestTimeoutError.as_str(),
            "HTTP request timeout error"
        );
        assert_eq!(
            ErrorType::HttpRequestBotDetectionError.as_str(),
            "Bot detection (403 Forbidden)"
        );
        assert_eq!(ErrorType::HttpRequestNotFound.as_str(), "Not Found (404)");
    }

    #[test]
    fn test_error_type_snake_case_keys() {
        let key = |error_type: ErrorType| -> &'static str { error_type.into() };
        assert_eq!(key(ErrorType::InvalidUrl), "invalid_url");
        assert_eq!(
            key(ErrorType::HttpRequestTimeoutError),
            "http_request_timeout_error"
        );
        assert_eq!(key(ErrorType::DocumentParseError), "document_parse_error");
    }

    #[test]
    fn test_all_error_types_have_string_representation() {
        for error_type in ErrorType::iter() {
            assert!(
                !error_type.as_str().is_empty(),
                "{:?} should have non-empty string",
                error_type
            );
        }
    }

    #[test]
    fn test_request_error_messages_match_client_messages() {
        assert_eq!(RequestError::Validation.to_string(), URL_REQUIRED_MESSAGE);
        let scrape = RequestError::from(ParseError::NotMarkup { length: 0 });
        assert_eq!(scrape.to_string(), SCRAPE_FAILED_MESSAGE);
    }

    #[test]
    fn test_scrape_error_keeps_cause() {
        use std::error::Error as _;

        let err = RequestError::from(TransportError::BodyTooLarge { limit: 10 });
        let source = err.source().expect("scrape error should carry a source");
        assert!(source.to_string().contains("exceeds 10 bytes"));
    }
}
