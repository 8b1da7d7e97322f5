use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::prelude::*;
use spots::record::{LatLng, LocationDraft};

use super::*;

fn draft(title: &str, tags: &[&str]) -> LocationDraft {
    let mut d = LocationDraft::at(LatLng::new(37.8, -122.4));
    d.title = title.to_owned();
    d.description = "somewhere".to_owned();
    for tag in tags {
        d.tags.insert(tag);
    }
    d
}

fn with_owner(f: impl FnOnce()) {
    let owner = Owner::new();
    owner.set();
    f();
}

// =============================================================
// filtered_records
// =============================================================

#[test]
fn filtered_records_empty_query_clones_all() {
    let mut store = LocationStore::new();
    store.add(draft("A", &[]));
    store.add(draft("B", &[]));
    let out = filtered_records(&store, &SearchState::new());
    assert_eq!(out.as_slice(), store.list());
}

#[test]
fn filtered_records_applies_query() {
    let mut store = LocationStore::new();
    store.add(draft("Golden Gate", &["bridge", "sunset"]));
    store.add(draft("Twin Peaks", &["city"]));
    let mut search = SearchState::new();
    search.set_query("SUN");
    let out = filtered_records(&store, &search);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].title(), "Golden Gate");
}

// =============================================================
// SpotsState
// =============================================================

#[test]
fn new_state_is_empty_and_closed() {
    with_owner(|| {
        let spots = SpotsState::new();
        assert!(spots.store.with_untracked(LocationStore::is_empty));
        assert!(spots.composer.get_untracked().is_none());
        assert_eq!(spots.map_center.get_untracked(), LatLng::new(37.8, -122.4));
    });
}

#[test]
fn filtered_memo_tracks_store_and_query() {
    with_owner(|| {
        let spots = SpotsState::new();
        let a = spots.add(draft("Golden Gate", &["bridge", "sunset"]));
        spots.add(draft("Twin Peaks", &["city"]));
        assert_eq!(spots.filtered.get_untracked().len(), 2);

        spots.set_query("sun".to_owned());
        let titles: Vec<String> = spots.filtered.get_untracked().iter().map(|r| r.title().to_owned()).collect();
        assert_eq!(titles, ["Golden Gate"]);

        if let Some(a) = a {
            spots.delete(a);
        }
        assert!(spots.filtered.get_untracked().is_empty());
        assert_eq!(spots.store.with_untracked(LocationStore::len), 1);
    });
}

#[test]
fn delete_selected_clears_selection() {
    with_owner(|| {
        let spots = SpotsState::new();
        let id = spots.add(draft("Pier 7", &[]));
        spots.select(id);
        assert_eq!(spots.store.with_untracked(LocationStore::selected), id);
        if let Some(id) = id {
            spots.delete(id);
        }
        assert!(spots.store.with_untracked(LocationStore::selected).is_none());
    });
}

#[test]
fn composer_opens_and_closes() {
    with_owner(|| {
        let spots = SpotsState::new();
        spots.open_composer(LatLng::new(1.5, 2.5));
        assert_eq!(spots.composer.get_untracked(), Some(LatLng::new(1.5, 2.5)));
        spots.close_composer();
        assert!(spots.composer.get_untracked().is_none());
    });
}

// =============================================================
// focus
// =============================================================

#[test]
fn focus_follows_selection() {
    with_owner(|| {
        let spots = SpotsState::new();
        assert_eq!(spots.focus.get_untracked(), None);
        let id = spots.add(draft("Golden Gate", &[]));
        spots.select(id);
        assert_eq!(spots.focus.get_untracked(), Some(LatLng::new(37.8, -122.4)));
        spots.select(None);
        assert_eq!(spots.focus.get_untracked(), None);
    });
}

#[test]
fn focus_ignores_unrelated_store_changes() {
    with_owner(|| {
        let spots = SpotsState::new();
        let selected = spots.add(draft("Golden Gate", &[]));
        let other = spots.add(draft("Twin Peaks", &[]));
        spots.select(selected);

        let runs = Arc::new(AtomicUsize::new(0));
        let observed = {
            let runs = Arc::clone(&runs);
            Memo::new(move |_| {
                runs.fetch_add(1, Ordering::SeqCst);
                spots.focus.get()
            })
        };
        assert!(observed.get_untracked().is_some());
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        spots.add(draft("Pier 7", &[]));
        if let Some(other) = other {
            spots.delete(other);
        }
        assert!(observed.get_untracked().is_some());
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        spots.select(None);
        assert_eq!(observed.get_untracked(), None);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    });
}

// =============================================================
// composer
// =============================================================

#[test]
fn close_composer_after_dispose_is_noop() {
    let owner = Owner::new();
    owner.set();
    let spots = SpotsState::new();
    spots.open_composer(LatLng::new(1.0, 2.0));
    owner.cleanup();
    spots.close_composer();
}
