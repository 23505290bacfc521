//! Error categorization.
//!
//! Maps client errors and upstream status codes onto `ErrorType` so that
//! failures can be logged and counted by category.

use reqwest::StatusCode;

use super::types::{ErrorType, ParseError, RequestError, ScrapeFailure, TransportError};

/// Categorizes an upstream non-2xx status.
pub fn categorize_status(status: StatusCode) -> ErrorType {
    match status.as_u16() {
        403 => ErrorType::HttpRequestBotDetectionError,
        404 => ErrorType::HttpRequestNotFound,
        429 => ErrorType::HttpRequestTooManyRequests,
        _ if status.is_server_error() => ErrorType::HttpRequestServerError,
        _ => ErrorType::HttpRequestStatusError,
    }
}

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// Status errors are checked first so that `error_for_status` failures land in
/// the same buckets as statuses observed directly.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if let Some(status) = error.status() {
        if status.is_client_error() || status.is_server_error() {
            return categorize_status(status);
        }
    }

    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

impl TransportError {
    /// Failure category of this transport error.
    pub fn error_type(&self) -> ErrorType {
        match self {
            TransportError::InvalidUrl { .. } => ErrorType::InvalidUrl,
            TransportError::Status { status } => categorize_status(*status),
            TransportError::Request { kind, .. } => *kind,
            TransportError::BodyTooLarge { .. } => ErrorType::ResponseTooLarge,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(source: reqwest::Error) -> Self {
        TransportError::Request {
            kind: categorize_reqwest_error(&source),
            source,
        }
    }
}

impl ParseError {
    /// Failure category of this parse error.
    pub fn error_type(&self) -> ErrorType {
        ErrorType::DocumentParseError
    }
}

impl RequestError {
    /// Failure category, or `None` for validation failures.
    pub fn error_type(&self) -> Option<ErrorType> {
        match self {
            RequestError::Validation => None,
            RequestError::Scrape(ScrapeFailure::Transport(e)) => Some(e.error_type()),
            RequestError::Scrape(ScrapeFailure::Parse(e)) => Some(e.error_type()),
        }
    }
}
