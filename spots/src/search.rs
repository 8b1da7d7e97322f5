//! Free-text search over saved locations.
//!
//! The filtered list is never stored. Callers hold a [`SearchState`] next to
//! the store and call [`SearchState::filter`] whenever either changes, which
//! the client does through a memo so a stale list cannot be rendered.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::record::LocationRecord;

/// The live search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    query: String,
}

impl SearchState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the query. An empty query matches everything.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether `record` matches the current query.
    #[must_use]
    pub fn matches(&self, record: &LocationRecord) -> bool {
        matches_query(record, &self.query.to_lowercase())
    }

    /// Records matching the query, in list order.
    #[must_use]
    pub fn filter<'a>(&self, records: &'a [LocationRecord]) -> Vec<&'a LocationRecord> {
        let needle = self.query.to_lowercase();
        records.iter().filter(|r| matches_query(r, &needle)).collect()
    }
}

/// Case-insensitive substring match against title, description and tags.
/// `needle` must already be lowercased.
fn matches_query(record: &LocationRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record.title().to_lowercase().contains(needle)
        || record.description().to_lowercase().contains(needle)
        || record.tags().iter().any(|tag| tag.to_lowercase().contains(needle))
}
