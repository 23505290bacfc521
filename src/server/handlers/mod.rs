//! HTTP handlers.

mod scrape;
mod status;

pub use scrape::scrape_product_handler;
pub use status::status_handler;
