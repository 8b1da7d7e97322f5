use std::collections::HashSet;

use super::*;
use crate::record::LatLng;

fn draft(title: &str, tags: &[&str]) -> LocationDraft {
    let mut d = LocationDraft::at(LatLng::new(37.8, -122.4));
    d.title = title.to_owned();
    d.description = format!("{title} description");
    for tag in tags {
        d.tags.insert(tag);
    }
    d
}

// =============================================================
// add
// =============================================================

#[test]
fn new_store_is_empty() {
    let store = LocationStore::new();
    assert!(store.is_empty());
    assert!(store.selected().is_none());
}

#[test]
fn add_appends_in_order() {
    let mut store = LocationStore::new();
    let a = store.add(draft("A", &[]));
    let b = store.add(draft("B", &[]));
    let ids: Vec<_> = store.list().iter().map(LocationRecord::id).collect();
    assert_eq!(ids, vec![a, b]);
}

#[test]
fn add_assigns_unique_ids() {
    let mut store = LocationStore::new();
    let ids: HashSet<_> = (0..200).map(|i| store.add(draft(&format!("spot {i}"), &[]))).collect();
    assert_eq!(ids.len(), 200);
    assert_eq!(store.len(), 200);
}

#[test]
fn add_does_not_deduplicate() {
    let mut store = LocationStore::new();
    let a = store.add(draft("Same", &["x"]));
    let b = store.add(draft("Same", &["x"]));
    assert_ne!(a, b);
    assert_eq!(store.len(), 2);
}

#[test]
fn add_does_not_change_selection() {
    let mut store = LocationStore::new();
    let a = store.add(draft("A", &[]));
    store.select(Some(a));
    store.add(draft("B", &[]));
    assert_eq!(store.selected(), Some(a));
}

// =============================================================
// delete
// =============================================================

#[test]
fn delete_removes_record() {
    let mut store = LocationStore::new();
    let a = store.add(draft("A", &[]));
    let b = store.add(draft("B", &[]));
    let removed = store.delete(a);
    assert_eq!(removed.map(|r| r.id()), Some(a));
    assert!(store.list().iter().all(|r| r.id() != a));
    assert_eq!(store.list()[0].id(), b);
}

#[test]
fn delete_absent_is_noop() {
    let mut store = LocationStore::new();
    let a = store.add(draft("A", &[]));
    let b = store.add(draft("B", &[]));
    store.delete(b);
    store.select(Some(a));
    let before = store.clone();

    assert!(store.delete(b).is_none());
    assert_eq!(store, before);
}

#[test]
fn delete_selected_clears_selection() {
    let mut store = LocationStore::new();
    let a = store.add(draft("A", &[]));
    store.select(Some(a));
    store.delete(a);
    assert!(store.selected().is_none());
}

#[test]
fn delete_other_keeps_selection() {
    let mut store = LocationStore::new();
    let a = store.add(draft("A", &[]));
    let b = store.add(draft("B", &[]));
    store.select(Some(a));
    store.delete(b);
    assert_eq!(store.selected(), Some(a));
}

#[test]
fn delete_absent_selected_id_still_clears_selection() {
    let mut store = LocationStore::new();
    let a = store.add(draft("A", &[]));
    store.delete(a);
    store.select(Some(a));
    assert!(store.delete(a).is_none());
    assert!(store.selected().is_none());
}

// =============================================================
// select
// =============================================================

#[test]
fn select_and_clear() {
    let mut store = LocationStore::new();
    let a = store.add(draft("A", &[]));
    store.select(Some(a));
    assert!(store.is_selected(a));
    assert_eq!(store.selected_record().map(LocationRecord::title), Some("A"));
    store.select(None);
    assert!(store.selected().is_none());
}

#[test]
fn select_unknown_id_is_permitted() {
    let mut store = LocationStore::new();
    let a = store.add(draft("A", &[]));
    store.delete(a);
    store.select(Some(a));
    assert_eq!(store.selected(), Some(a));
    assert!(store.selected_record().is_none());
}

#[test]
fn get_finds_by_id() {
    let mut store = LocationStore::new();
    let a = store.add(draft("A", &["one"]));
    assert_eq!(store.get(a).map(LocationRecord::title), Some("A"));
}
