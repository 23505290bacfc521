//! product_importer library: product page scraping behind a small HTTP API
//!
//! This library fetches a product page, walks fixed CSS-selector fallback
//! chains over it, and returns a flat [`ProductRecord`]. The same crate serves
//! the JSON endpoint and the prebuilt browser client.
//!
//! # Example
//!
//! ```no_run
//! use product_importer::{start_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     port: 8080,
//!     ..Default::default()
//! };
//!
//! start_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Extraction alone needs no runtime:
//!
//! ```
//! use product_importer::extract_product;
//!
//! let record = extract_product(r#"<span id="productTitle">Widget</span>"#).unwrap();
//! assert_eq!(record.name.as_deref(), Some("Widget"));
//! ```
//!
//! # Requirements
//!
//! The server and fetch APIs require a Tokio runtime.

#![warn(missing_docs)]

pub mod config;
mod document;
mod error_handling;
mod extract;
mod fetch;
pub mod initialization;
mod models;
mod scrape;
mod server;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use document::{Document, Node};
pub use error_handling::{
    ErrorType, InitializationError, ParseError, ProcessingStats, RequestError, ScrapeFailure,
    TransportError,
};
pub use extract::{extract_from_document, extract_product, parse_detail_item};
pub use fetch::{validate_and_normalize_url, PageFetcher};
pub use models::{ProductRecord, ScrapeRequest};
pub use scrape::handle_scrape_request;
pub use server::{build_router, start_server, AppState, ErrorResponse, StatusResponse};
