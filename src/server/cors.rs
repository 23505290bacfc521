//! CORS policy for browser clients.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::error_handling::InitializationError;

/// Builds a CORS layer that only admits the given origins.
///
/// Requests from other origins still reach the handlers; the browser drops the
/// response because no `Access-Control-Allow-Origin` header is echoed.
///
/// # Errors
///
/// Returns `InitializationError::OriginError` for an origin that is not a
/// valid header value.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, InitializationError> {
    let origins = origins
        .iter()
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| InitializationError::OriginError(origin.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}
