//! CSS selector parsing utilities.

use scraper::Selector;

/// Parses a CSS selector that must succeed.
///
/// Used for the static selector tables, whose selector strings are literals;
/// a parse failure there is a programming error, not bad input.
///
/// # Panics
///
/// Panics if the selector cannot be parsed.
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}
