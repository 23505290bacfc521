//! `POST /scrape-product`

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::super::types::AppState;
use crate::models::ScrapeRequest;
use crate::scrape::handle_scrape_request;

/// Scrapes the product page named in the JSON body.
///
/// A body that is not a JSON object with a string `url` is treated as a
/// request without a URL.
pub async fn scrape_product_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScrapeRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            log::debug!("Unreadable scrape request body: {}", rejection.body_text());
            ScrapeRequest::default()
        }
    };

    match handle_scrape_request(&state.fetcher, request).await {
        Ok(record) => {
            state.stats.record_success();
            (StatusCode::OK, Json(record)).into_response()
        }
        Err(e) => {
            state.stats.record_failure(&e);
            e.into_response()
        }
    }
}
