//! Error handling and request statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, transport, parse, request)
//! - Categorization of upstream failures into `ErrorType`
//! - Request statistics tracking
//!
//! Every failure below the request handler collapses into one of two
//! client-visible messages; the categories here are for logs and `/status`.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{
    ErrorType, InitializationError, ParseError, RequestError, ScrapeFailure, TransportError,
};
