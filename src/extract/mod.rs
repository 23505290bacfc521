//! Product field extraction.
//!
//! Turns a product page into a [`ProductRecord`] by walking the static
//! selector tables in [`rules`]. Extraction never fails for a missing field;
//! the only error is a body that is not markup at all.

pub mod rules;

use indexmap::IndexMap;

use crate::document::Document;
use crate::error_handling::ParseError;
use crate::models::ProductRecord;
use crate::utils::clean_text;

use rules::{
    BREADCRUMBS_RULE, BULLETS_RULE, DESCRIPTION_RULE, DETAILS_RULE, IMAGE_RULE, NAME_RULE,
    PRICE_RULE, RATING_COUNT_RULE, RATING_RULE,
};

/// Parses `html` and extracts every product field.
///
/// Pure function of its input: no network access and no shared mutable state.
///
/// # Errors
///
/// Returns `ParseError` when `html` is not markup.
pub fn extract_product(html: &str) -> Result<ProductRecord, ParseError> {
    let document = Document::parse(html)?;
    Ok(extract_from_document(&document))
}

/// Extracts every product field from an already parsed document.
pub fn extract_from_document(document: &Document) -> ProductRecord {
    ProductRecord {
        name: NAME_RULE.resolve(document),
        price: PRICE_RULE.resolve(document),
        description: DESCRIPTION_RULE.resolve(document),
        image: IMAGE_RULE.resolve(document),
        bullets: BULLETS_RULE.collect_text(document),
        product_details: extract_product_details(document),
        breadcrumbs: BREADCRUMBS_RULE.collect_text(document),
        rating: RATING_RULE.resolve(document),
        rating_count: RATING_COUNT_RULE.resolve(document),
    }
}

/// Builds the detail table from `Key: Value` list items.
///
/// A repeated key keeps its first position and takes the later value.
fn extract_product_details(document: &Document) -> IndexMap<String, String> {
    let mut details = IndexMap::new();
    for node in DETAILS_RULE.nodes(document) {
        let text = node.text();
        match parse_detail_item(&text) {
            Some((key, value)) => {
                details.insert(key.to_string(), value.to_string());
            }
            None => log::trace!("Skipping detail item {:?}", clean_text(&text)),
        }
    }
    details
}

/// Splits a detail item on `:`.
///
/// Only items with exactly one colon and a non-empty key and value produce a
/// pair; anything else is skipped rather than guessed at.
pub fn parse_detail_item(text: &str) -> Option<(&str, &str)> {
    let mut parts = clean_text(text).split(':');
    let key = clean_text(parts.next()?);
    let value = clean_text(parts.next()?);
    if parts.next().is_some() || key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}
