//! Session-scoped store of saved locations and the current selection.
//!
//! DESIGN
//! ======
//! The store is the single source of truth that every view reads from. It
//! keeps records in insertion order (which is also display order) and at most
//! one selected identifier. Deleting the selected record clears the selection
//! inside the same call, so no caller can observe a selection pointing at a
//! record that was just removed.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::record::{LocationDraft, LocationId, LocationRecord};

/// Ordered in-memory list of locations plus the selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationStore {
    records: Vec<LocationRecord>,
    selected: Option<LocationId>,
}

impl LocationStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a fresh identifier to `draft`, append it, and return the id.
    ///
    /// No deduplication is performed; two identical drafts become two records.
    pub fn add(&mut self, draft: LocationDraft) -> LocationId {
        let mut id = LocationId::generate();
        while self.get(id).is_some() {
            id = LocationId::generate();
        }
        self.records.push(LocationRecord::from_draft(id, draft));
        id
    }

    /// Remove the record with `id`, returning it if it was present.
    ///
    /// If `id` is the current selection the selection is cleared, whether or
    /// not a record was removed.
    pub fn delete(&mut self, id: LocationId) -> Option<LocationRecord> {
        if self.selected == Some(id) {
            self.selected = None;
        }
        let index = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(index))
    }

    /// Set or clear the selection. The id is not checked against the list.
    pub fn select(&mut self, id: Option<LocationId>) {
        self.selected = id;
    }

    /// All records in insertion order.
    #[must_use]
    pub fn list(&self) -> &[LocationRecord] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, id: LocationId) -> Option<&LocationRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// The selected id, which may not match any record.
    #[must_use]
    pub fn selected(&self) -> Option<LocationId> {
        self.selected
    }

    /// The record the selection points at, if it exists.
    #[must_use]
    pub fn selected_record(&self) -> Option<&LocationRecord> {
        self.selected.and_then(|id| self.get(id))
    }

    #[must_use]
    pub fn is_selected(&self, id: LocationId) -> bool {
        self.selected == Some(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
