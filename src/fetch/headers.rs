//! Browser-like request headers.

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, UPGRADE_INSECURE_REQUESTS};

/// Headers mimicking a desktop browser navigation.
///
/// Product pages serve a reduced or captcha page to clients without them.
/// `Accept-Encoding` is left to reqwest so it can decode compressed bodies.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(
                ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
            )
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .header(UPGRADE_INSECURE_REQUESTS, "1")
            .header(CACHE_CONTROL, "max-age=0")
    }
}
