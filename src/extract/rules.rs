//! Static selector tables.
//!
//! Each scalar field has a fallback chain of (selector, mode) candidates tried
//! in priority order; each collection field has a single scoping selector.
//! Product page markup differs between template versions, so chains list every
//! known location of a field, newest template first.
//!
//! Selectors are compiled once, on first use.

use std::sync::LazyLock;

use scraper::Selector;
use serde_json::{Map, Value};

use crate::document::{Document, Node};
use crate::utils::{clean_text, parse_selector_unsafe};

/// How a value is read from a matched element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    /// The element's text content.
    Text,
    /// The value of the named attribute.
    Attr(&'static str),
    /// The named attribute holds a JSON object keyed by image URL; the last
    /// key is taken as the highest-resolution candidate.
    DynamicImage(&'static str),
}

/// One entry of a fallback chain.
pub struct Candidate {
    pub selector_str: &'static str,
    pub mode: ExtractionMode,
    selector: Selector,
}

impl Candidate {
    fn new(field: &'static str, selector_str: &'static str, mode: ExtractionMode) -> Self {
        Self {
            selector_str,
            mode,
            selector: parse_selector_unsafe(selector_str, field),
        }
    }

    /// Reads this candidate from `document`; `None` when absent or blank.
    pub fn evaluate(&self, document: &Document) -> Option<String> {
        let node = document.select_first(&self.selector)?;
        let raw = match self.mode {
            ExtractionMode::Text => node.text(),
            ExtractionMode::Attr(name) => node.attr(name)?.to_string(),
            ExtractionMode::DynamicImage(name) => last_dynamic_image_key(node.attr(name)?)?,
        };
        non_empty(&raw)
    }
}

/// Ordered fallback chain for a scalar field.
pub struct FieldRule {
    pub field: &'static str,
    pub candidates: Vec<Candidate>,
}

impl FieldRule {
    fn new(field: &'static str, candidates: &[(&'static str, ExtractionMode)]) -> Self {
        Self {
            field,
            candidates: candidates
                .iter()
                .map(|&(selector_str, mode)| Candidate::new(field, selector_str, mode))
                .collect(),
        }
    }

    /// First non-empty candidate value, walking the chain in order.
    pub fn resolve(&self, document: &Document) -> Option<String> {
        for (priority, candidate) in self.candidates.iter().enumerate() {
            if let Some(value) = candidate.evaluate(document) {
                log::trace!(
                    "{}: matched candidate {} '{}'",
                    self.field,
                    priority,
                    candidate.selector_str
                );
                return Some(value);
            }
        }
        log::trace!("{}: no candidate matched", self.field);
        None
    }
}

/// Scoping selector for a collection field.
pub struct ListRule {
    pub field: &'static str,
    pub selector_str: &'static str,
    selector: Selector,
}

impl ListRule {
    fn new(field: &'static str, selector_str: &'static str) -> Self {
        Self {
            field,
            selector_str,
            selector: parse_selector_unsafe(selector_str, field),
        }
    }

    /// Matching elements in document order.
    pub fn nodes<'a>(&self, document: &'a Document) -> Vec<Node<'a>> {
        document.select_all(&self.selector)
    }

    /// Cleaned text of every matching element, in document order.
    pub fn collect_text(&self, document: &Document) -> Vec<String> {
        let items: Vec<String> = self
            .nodes(document)
            .iter()
            .map(|node| clean_text(&node.text()).to_string())
            .collect();
        log::trace!(
            "{}: {} items matched '{}'",
            self.field,
            items.len(),
            self.selector_str
        );
        items
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let cleaned = clean_text(raw);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Last key of a JSON object attribute such as
/// `{"https://…/small.jpg":[200,200],"https://…/large.jpg":[800,800]}`.
///
/// Key order follows the attribute text. Nothing guarantees the last entry is
/// the largest; it is what the pages have shipped so far.
fn last_dynamic_image_key(attr: &str) -> Option<String> {
    match serde_json::from_str::<Map<String, Value>>(attr) {
        Ok(images) => images.keys().last().cloned(),
        Err(e) => {
            log::debug!("Ignoring unparsable dynamic image attribute: {}", e);
            None
        }
    }
}

pub static NAME_RULE: LazyLock<FieldRule> = LazyLock::new(|| {
    FieldRule::new(
        "name",
        &[
            ("#productTitle", ExtractionMode::Text),
            ("h1.a-size-large.a-spacing-none", ExtractionMode::Text),
        ],
    )
});

pub static PRICE_RULE: LazyLock<FieldRule> = LazyLock::new(|| {
    FieldRule::new(
        "price",
        &[
            (
                "#corePriceDisplay_desktop .a-price .a-offscreen",
                ExtractionMode::Text,
            ),
            ("#priceblock_ourprice", ExtractionMode::Text),
            (
                "#apex_offerDisplay_desktop .a-price .a-offscreen",
                ExtractionMode::Text,
            ),
        ],
    )
});

pub static DESCRIPTION_RULE: LazyLock<FieldRule> = LazyLock::new(|| {
    FieldRule::new(
        "description",
        &[
            ("#feature-bullets ul", ExtractionMode::Text),
            ("#productDescription", ExtractionMode::Text),
        ],
    )
});

pub static IMAGE_RULE: LazyLock<FieldRule> = LazyLock::new(|| {
    FieldRule::new(
        "image",
        &[
            (
                "#landingImage",
                ExtractionMode::DynamicImage("data-a-dynamic-image"),
            ),
            ("#landingImage", ExtractionMode::Attr("src")),
        ],
    )
});

pub static RATING_RULE: LazyLock<FieldRule> = LazyLock::new(|| {
    FieldRule::new(
        "rating",
        &[(
            "#averageCustomerReviews_feature_div #averageCustomerReviews .a-size-base.a-color-base",
            ExtractionMode::Text,
        )],
    )
});

pub static RATING_COUNT_RULE: LazyLock<FieldRule> = LazyLock::new(|| {
    FieldRule::new(
        "ratingCount",
        &[(
            "#averageCustomerReviews_feature_div #averageCustomerReviews #acrCustomerReviewText",
            ExtractionMode::Text,
        )],
    )
});

pub static BULLETS_RULE: LazyLock<ListRule> =
    LazyLock::new(|| ListRule::new("bullets", "#feature-bullets ul li span.a-list-item"));

pub static BREADCRUMBS_RULE: LazyLock<ListRule> =
    LazyLock::new(|| ListRule::new("breadcrumbs", "#wayfinding-breadcrumbs_container ul li a"));

pub static DETAILS_RULE: LazyLock<ListRule> =
    LazyLock::new(|| ListRule::new("productDetails", "#detailBullets_feature_div .a-list-item"));
