//! Builders for the fragments of a search-query document.
//!
//! A document is a tree of mappings, lists and scalars:
//!
//! ```text
//! {
//!   "query": {
//!     "projection": [{ "name": .. }],
//!     "filter": { "filter": { "attribute": { "name": .. }, "parameter": { .. } } }
//!             | { "not": <filter> } | { "and": [..] } | { "or": [..] },
//!     "sort": [{ "attribute": { "name": .. }, "order": "ascending" | "descending" }]
//!   },
//!   "per_page": ..,
//!   "offset": ..
//! }
//! ```

use serde_json::{Map, json};

pub type Document = serde_json::Value;

pub const QUERY: &str = "query";
pub const PROJECTION: &str = "projection";
pub const FILTER: &str = "filter";
pub const SORT: &str = "sort";
pub const PER_PAGE: &str = "per_page";
pub const OFFSET: &str = "offset";
pub const AND: &str = "and";
pub const OR: &str = "or";
pub const NOT: &str = "not";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }
}

/// The condition applied to an attribute inside a `filter` fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum Parameter {
    Eq(Document),
    IsNull(bool),
}

impl Parameter {
    fn into_document(self) -> Document {
        match self {
            Parameter::Eq(value) => json!({ "eq": value }),
            Parameter::IsNull(is_null) => json!({ "is_null": is_null }),
        }
    }
}

pub fn attribute(name: &str) -> Document {
    json!({ "name": name })
}

pub fn filter(name: &str, parameter: Parameter) -> Document {
    json!({
        FILTER: {
            "attribute": attribute(name),
            "parameter": parameter.into_document(),
        }
    })
}

pub fn not_filter(filter: Document) -> Document {
    json!({ NOT: filter })
}

/// A combinator over already translated fragments, e.g. `{ "and": [a, b] }`.
pub fn combine(op: &str, fragments: Vec<Document>) -> Document {
    let mut map = Map::new();
    map.insert(op.to_string(), Document::Array(fragments));
    Document::Object(map)
}

pub fn sort(name: &str, order: SortOrder) -> Document {
    json!({
        "attribute": attribute(name),
        "order": order.as_str(),
    })
}
