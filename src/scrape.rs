//! Scrape request handling.
//!
//! Validates the request, fetches the page, runs extraction, and logs the
//! outcome. Independent of the HTTP framework; the server maps the result onto
//! a response.

use log::{debug, error, info, warn};

use crate::error_handling::RequestError;
use crate::extract::extract_product;
use crate::fetch::PageFetcher;
use crate::models::{ProductRecord, ScrapeRequest};
use crate::utils::sanitize_and_truncate_error_message;

/// Handles one scrape request.
///
/// # Errors
///
/// - `RequestError::Validation` when `url` is missing or blank
/// - `RequestError::Scrape` when the fetch fails or the body is not markup
pub async fn handle_scrape_request(
    fetcher: &PageFetcher,
    request: ScrapeRequest,
) -> Result<ProductRecord, RequestError> {
    let url = match request.url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => {
            warn!("Rejected scrape request without a URL");
            return Err(RequestError::Validation);
        }
    };

    match scrape(fetcher, url).await {
        Ok(record) => {
            info!(
                "Scraped {}: name={:?} price={:?} bullets={} details={} breadcrumbs={}",
                url,
                record.name,
                record.price,
                record.bullets.len(),
                record.product_details.len(),
                record.breadcrumbs.len()
            );
            debug!("Product record for {}: {:?}", url, record);
            Ok(record)
        }
        Err(e) => {
            log_scrape_failure(url, &e);
            Err(e)
        }
    }
}

async fn scrape(fetcher: &PageFetcher, url: &str) -> Result<ProductRecord, RequestError> {
    let html = fetcher.fetch(url).await?;
    Ok(extract_product(&html)?)
}

fn log_scrape_failure(url: &str, e: &RequestError) {
    let category = e
        .error_type()
        .map(|t| t.as_str())
        .unwrap_or("Validation error");
    let cause = match std::error::Error::source(e) {
        Some(source) => cause_chain(source),
        None => e.to_string(),
    };
    error!(
        "Error scraping product {}: [{}] {}",
        url,
        category,
        sanitize_and_truncate_error_message(&cause)
    );
}

/// Renders `error` and every source below it, outermost first.
///
/// Causes whose message already appears in the text are skipped.
fn cause_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut current = error.source();
    while let Some(cause) = current {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(" <- ");
            message.push_str(&text);
        }
        current = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::{ErrorType, ScrapeFailure};
    use httptest::{matchers::*, responders::*, Expectation, Server};
    use std::sync::Arc;

    fn test_fetcher() -> PageFetcher {
        PageFetcher::new(Arc::new(reqwest::Client::new()))
    }

    #[tokio::test]
    async fn test_missing_url_is_validation_error() {
        let result = handle_scrape_request(&test_fetcher(), ScrapeRequest { url: None }).await;
        assert!(matches!(result, Err(RequestError::Validation)));
    }

    #[tokio::test]
    async fn test_blank_url_is_validation_error() {
        let request = ScrapeRequest {
            url: Some("   ".to_string()),
        };
        let result = handle_scrape_request(&test_fetcher(), request).await;
        assert!(matches!(result, Err(RequestError::Validation)));
    }

    #[tokio::test]
    async fn test_scrape_success() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/dp/widget")).respond_with(
                status_code(200)
                    .body(r#"<html><body><span id="productTitle">Widget</span></body></html>"#),
            ),
        );

        let request = ScrapeRequest {
            url: Some(server.url("/dp/widget").to_string()),
        };
        let record = handle_scrape_request(&test_fetcher(), request)
            .await
            .unwrap();
        assert_eq!(record.name.as_deref(), Some("Widget"));
    }

    #[tokio::test]
    async fn test_non_markup_body_is_scrape_error() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/text"))
                .respond_with(status_code(200).body("plain text, no tags")),
        );

        let request = ScrapeRequest {
            url: Some(server.url("/text").to_string()),
        };
        let err = handle_scrape_request(&test_fetcher(), request)
            .await
            .unwrap_err();
        assert!(matches!(err, RequestError::Scrape(ScrapeFailure::Parse(_))));
        assert_eq!(err.error_type(), Some(ErrorType::DocumentParseError));
    }

    #[tokio::test]
    async fn test_cause_chain_reaches_root_cause() {
        let request = ScrapeRequest {
            url: Some("http://127.0.0.1:1/".to_string()),
        };
        let err = handle_scrape_request(&test_fetcher(), request)
            .await
            .unwrap_err();
        let failure = std::error::Error::source(&err).expect("scrape error has a source");

        let mut root: &dyn std::error::Error = failure;
        while let Some(next) = root.source() {
            root = next;
        }
        // reqwest's own message stops at "error sending request"; the OS error sits deeper
        let chain = cause_chain(failure);
        assert!(chain.contains(" <- "), "chain: {}", chain);
        assert!(chain.contains(&root.to_string()), "chain: {}", chain);
    }

    #[derive(Debug, thiserror::Error)]
    #[error("wrapped: {0}")]
    struct Wrapped(#[source] std::io::Error);

    #[derive(Debug, thiserror::Error)]
    #[error("request failed")]
    struct Opaque(#[source] std::io::Error);

    fn refused() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused")
    }

    #[test]
    fn test_cause_chain_appends_hidden_sources() {
        assert_eq!(cause_chain(&Opaque(refused())), "request failed <- refused");
    }

    #[test]
    fn test_cause_chain_skips_repeated_messages() {
        assert_eq!(cause_chain(&Wrapped(refused())), "wrapped: refused");
    }

    #[tokio::test]
    async fn test_upstream_404_is_scrape_error() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/gone"))
                .respond_with(status_code(404)),
        );

        let request = ScrapeRequest {
            url: Some(server.url("/gone").to_string()),
        };
        let err = handle_scrape_request(&test_fetcher(), request)
            .await
            .unwrap_err();
        assert_eq!(err.error_type(), Some(ErrorType::HttpRequestNotFound));
    }
}
