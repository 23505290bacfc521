use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Structured fields extracted from one product page.
///
/// Every field is independently optional: a missing selector yields `None` or
/// an empty collection. Collections always serialize, scalars serialize as a
/// string or `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Product title.
    pub name: Option<String>,
    /// Raw price text, currency symbol included.
    pub price: Option<String>,
    /// Bullet list text, or the long product description.
    pub description: Option<String>,
    /// Image URL.
    pub image: Option<String>,
    /// Feature bullet texts in document order.
    pub bullets: Vec<String>,
    /// Detail-list entries in document order.
    pub product_details: IndexMap<String, String>,
    /// Category path, outermost first.
    pub breadcrumbs: Vec<String>,
    /// Average rating text, e.g. `4.6`.
    pub rating: Option<String>,
    /// Rating count text, e.g. `1,234 ratings`.
    pub rating_count: Option<String>,
}

/// Body of `POST /scrape-product`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScrapeRequest {
    /// Product page URL; missing and blank are both rejected.
    #[serde(default)]
    pub url: Option<String>,
}
