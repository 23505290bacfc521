//! URL validation and normalization.

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::TransportError;

/// Validates and normalizes a product page URL.
///
/// Adds an `https://` prefix when no scheme is given (users paste
/// `www.shop.example/dp/...` as often as full URLs), then requires a
/// syntactically valid `http`/`https` URL no longer than `MAX_URL_LENGTH`.
///
/// # Errors
///
/// Returns `TransportError::InvalidUrl` describing the rejection.
pub fn validate_and_normalize_url(url: &str) -> Result<String, TransportError> {
    let invalid = |reason: String| TransportError::InvalidUrl {
        url: url.chars().take(100).collect(),
        reason,
    };

    let url = url.trim();
    let normalized = if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{url}")
    };

    // Checked after normalization since the prefix can push a URL over the limit
    if normalized.len() > MAX_URL_LENGTH {
        return Err(invalid(format!(
            "exceeds maximum length ({} > {})",
            normalized.len(),
            MAX_URL_LENGTH
        )));
    }

    let parsed = url::Url::parse(&normalized).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(normalized),
        scheme => Err(invalid(format!("unsupported scheme '{scheme}'"))),
    }
}
