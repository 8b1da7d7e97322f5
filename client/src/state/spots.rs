//! Reactive wrapper around the location store and search query.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SpotsState` is constructed once in `App` and passed down as a prop to the
//! navbar, map, sidebar and entry form. All mutations go through its methods
//! so photo resources are released and the derived filtered list stays in
//! step with the store: `filtered` is a memo, so any read after a store or
//! query change recomputes before it returns.

#[cfg(test)]
#[path = "spots_test.rs"]
mod spots_test;

use leptos::prelude::*;
use spots::record::{LatLng, LocationDraft, LocationId, LocationRecord};
use spots::search::SearchState;
use spots::store::LocationStore;

use crate::consts::DEFAULT_CENTER;
use crate::util::photo::release_source;

/// Session state shared by every view. Cheap to copy.
#[derive(Clone, Copy)]
pub struct SpotsState {
    /// Saved locations and the current selection.
    pub store: RwSignal<LocationStore>,
    /// Live search query.
    pub search: RwSignal<SearchState>,
    /// Store records matching the query, in store order.
    pub filtered: Memo<Vec<LocationRecord>>,
    /// Position of the selected record. Only changes when that position does.
    pub focus: Memo<Option<LatLng>>,
    /// Position the entry form is open at, if it is open.
    pub composer: RwSignal<Option<LatLng>>,
    /// Last known centre of the main map.
    pub map_center: RwSignal<LatLng>,
}

impl SpotsState {
    #[must_use]
    pub fn new() -> Self {
        let store = RwSignal::new(LocationStore::new());
        let search = RwSignal::new(SearchState::new());
        let filtered = Memo::new(move |_| store.with(|s| search.with(|q| filtered_records(s, q))));
        let focus = Memo::new(move |_| store.with(|s| s.selected_record().map(LocationRecord::position)));
        Self {
            store,
            search,
            filtered,
            focus,
            composer: RwSignal::new(None),
            map_center: RwSignal::new(LatLng::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1)),
        }
    }

    /// Store a submitted draft. Returns `None` only if the state was disposed.
    pub fn add(&self, draft: LocationDraft) -> Option<LocationId> {
        let id = self.store.try_update(|s| s.add(draft))?;
        log::debug!("location added: {id}");
        Some(id)
    }

    /// Delete a location and release its uploaded photo, if any.
    pub fn delete(&self, id: LocationId) {
        let removed = self.store.try_update(|s| s.delete(id)).flatten();
        if let Some(record) = removed {
            log::debug!("location deleted: {id}");
            release_source(record.photo());
        }
    }

    pub fn select(&self, id: Option<LocationId>) {
        self.store.update(|s| s.select(id));
    }

    pub fn set_query(&self, query: String) {
        self.search.update(|s| s.set_query(query));
    }

    /// Open the entry form anchored at `position`.
    pub fn open_composer(&self, position: LatLng) {
        self.composer.set(Some(position));
    }

    /// Close the entry form. A no-op once the state has been disposed.
    pub fn close_composer(&self) {
        let _ = self.composer.try_set(None);
    }
}

impl Default for SpotsState {
    fn default() -> Self {
        Self::new()
    }
}

/// Records from `store` that match `search`, cloned in store order.
#[must_use]
pub fn filtered_records(store: &LocationStore, search: &SearchState) -> Vec<LocationRecord> {
    search.filter(store.list()).into_iter().cloned().collect()
}
