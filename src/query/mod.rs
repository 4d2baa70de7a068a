//! # Query Engine
//!
//! Sorting and pagination over a snapshot of the record collection, as a
//! pure function: no store access, no side effects, always a (possibly
//! empty) sequence.

use serde::Deserialize;

use crate::dogs::Dog;

/// Attribute a listing is sorted by.
///
/// Resolved case-insensitively; anything outside {"weight", "tail_length"}
/// falls back to [`SortKey::Name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    TailLength,
    Weight,
}

impl SortKey {
    /// Resolve a raw attribute string to a sort key
    pub fn resolve(attribute: &str) -> Self {
        match attribute.to_lowercase().as_str() {
            "weight" => SortKey::Weight,
            "tail_length" => SortKey::TailLength,
            _ => SortKey::Name,
        }
    }
}

/// Sort direction, resolved case-insensitively; only "desc" descends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Resolve a raw order string to a direction
    pub fn resolve(order: &str) -> Self {
        if order.eq_ignore_ascii_case("desc") {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}

fn default_attribute() -> String {
    "name".to_string()
}

fn default_order() -> String {
    "asc".to_string()
}

fn default_page_number() -> i64 {
    1
}

fn default_page_size() -> i64 {
    10
}

/// Listing parameters as they arrive on the query string.
///
/// `pageNumber` and `pageSize` are clamped to a minimum of 1 when the window
/// is computed; values past the data yield an empty page, never an error.
#[derive(Debug, Clone, Deserialize)]
pub struct DogQuery {
    #[serde(default = "default_attribute")]
    pub attribute: String,

    #[serde(default = "default_order")]
    pub order: String,

    #[serde(rename = "pageNumber", default = "default_page_number")]
    pub page_number: i64,

    #[serde(rename = "pageSize", default = "default_page_size")]
    pub page_size: i64,
}

impl Default for DogQuery {
    fn default() -> Self {
        Self {
            attribute: default_attribute(),
            order: default_order(),
            page_number: default_page_number(),
            page_size: default_page_size(),
        }
    }
}

/// Sort and paginate a record snapshot.
///
/// Ties on the sort key keep insertion order (identity ascending), so
/// repeated queries over the same snapshot are deterministic.
pub fn apply(mut records: Vec<Dog>, query: &DogQuery) -> Vec<Dog> {
    let key = SortKey::resolve(&query.attribute);
    let order = SortOrder::resolve(&query.order);

    records.sort_by(|a, b| {
        let by_key = match key {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::TailLength => a.tail_length.cmp(&b.tail_length),
            SortKey::Weight => a.weight.cmp(&b.weight),
        };
        let directed = match order {
            SortOrder::Ascending => by_key,
            SortOrder::Descending => by_key.reverse(),
        };
        directed.then(a.id.cmp(&b.id))
    });

    let page_number = query.page_number.max(1) as usize;
    let page_size = query.page_size.max(1) as usize;
    // Extreme page values must land past the data, not wrap the window back
    // into it.
    let skip = (page_number - 1).checked_mul(page_size).unwrap_or(usize::MAX);

    records.into_iter().skip(skip).take(page_size).collect()
}
