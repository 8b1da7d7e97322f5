#![allow(clippy::float_cmp)]

use super::*;

fn builder() -> DraftBuilder {
    DraftBuilder::new(LatLng::new(37.8, -122.4))
}

fn upload(name: &str) -> UploadedPhoto {
    UploadedPhoto { file_name: name.to_owned(), object_url: format!("blob:test/{name}") }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_builder_defaults() {
    let b = builder();
    assert_eq!(b.position(), LatLng::new(37.8, -122.4));
    assert!(b.title().is_empty());
    assert!(b.description().is_empty());
    assert_eq!(b.direction().degrees(), 0.0);
    assert!(b.tags().is_empty());
    assert_eq!(b.photo_mode(), PhotoMode::Upload);
    assert!(b.photo().is_none());
}

// =============================================================
// Direction
// =============================================================

#[test]
fn set_direction_in_range() {
    let mut b = builder();
    b.set_direction(270.0).unwrap();
    assert_eq!(b.direction().degrees(), 270.0);
}

#[test]
fn set_direction_out_of_range_keeps_previous() {
    let mut b = builder();
    b.set_direction(90.0).unwrap();
    assert_eq!(b.set_direction(361.0), Err(DraftError::DirectionOutOfRange(361.0)));
    assert_eq!(b.direction().degrees(), 90.0);
}

// =============================================================
// Tags
// =============================================================

#[test]
fn add_tag_twice_keeps_one() {
    let mut b = builder();
    assert!(b.add_tag("landscape"));
    assert!(!b.add_tag("landscape"));
    assert_eq!(b.tags().as_slice(), ["landscape"]);
}

#[test]
fn add_tag_trims_and_ignores_blank() {
    let mut b = builder();
    assert!(b.add_tag("  golden hour "));
    assert!(!b.add_tag("  "));
    assert_eq!(b.tags().as_slice(), ["golden hour"]);
}

#[test]
fn remove_tag_exact() {
    let mut b = builder();
    b.add_tag("fog");
    b.add_tag("bridge");
    assert!(b.remove_tag("fog"));
    assert!(!b.remove_tag("fog"));
    assert_eq!(b.tags().as_slice(), ["bridge"]);
}

// =============================================================
// Photo source
// =============================================================

#[test]
fn upload_mode_yields_upload_photo() {
    let mut b = builder();
    assert!(b.set_upload(upload("a.jpg")).is_none());
    assert_eq!(b.photo(), Some(PhotoSource::Upload(upload("a.jpg"))));
}

#[test]
fn replacing_upload_returns_previous() {
    let mut b = builder();
    b.set_upload(upload("a.jpg"));
    assert_eq!(b.set_upload(upload("b.jpg")), Some(upload("a.jpg")));
    assert_eq!(b.pending_upload(), Some(&upload("b.jpg")));
}

#[test]
fn switching_to_url_discards_upload() {
    let mut b = builder();
    b.set_upload(upload("a.jpg"));
    assert_eq!(b.set_photo_mode(PhotoMode::Url), Some(upload("a.jpg")));
    assert!(b.pending_upload().is_none());
    assert!(b.photo().is_none());
}

#[test]
fn switching_to_upload_discards_url() {
    let mut b = builder();
    b.set_photo_url("https://example.com/p.jpg");
    assert_eq!(b.photo(), Some(PhotoSource::Url("https://example.com/p.jpg".to_owned())));
    assert!(b.set_photo_mode(PhotoMode::Upload).is_none());
    assert!(b.photo_url().is_empty());
    assert!(b.photo().is_none());
}

#[test]
fn set_photo_url_from_upload_mode_returns_upload() {
    let mut b = builder();
    b.set_upload(upload("a.jpg"));
    assert_eq!(b.set_photo_url("https://example.com"), Some(upload("a.jpg")));
    assert_eq!(b.photo_mode(), PhotoMode::Url);
}

#[test]
fn same_mode_switch_is_noop() {
    let mut b = builder();
    b.set_upload(upload("a.jpg"));
    assert!(b.set_photo_mode(PhotoMode::Upload).is_none());
    assert_eq!(b.pending_upload(), Some(&upload("a.jpg")));
}

#[test]
fn blank_url_means_no_photo() {
    let mut b = builder();
    b.set_photo_url("   ");
    assert!(b.photo().is_none());
}

#[test]
fn clear_upload_returns_it() {
    let mut b = builder();
    b.set_upload(upload("a.jpg"));
    assert_eq!(b.clear_upload(), Some(upload("a.jpg")));
    assert!(b.photo().is_none());
}

#[test]
fn discard_returns_pending_upload() {
    let mut b = builder();
    b.set_upload(upload("a.jpg"));
    assert_eq!(b.discard(), Some(upload("a.jpg")));
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_requires_title() {
    let mut b = builder();
    b.set_description("desc");
    assert_eq!(b.submit(), Err(DraftError::MissingTitle));
}

#[test]
fn submit_requires_description() {
    let mut b = builder();
    b.set_title("Title");
    b.set_description("   ");
    assert_eq!(b.submit(), Err(DraftError::MissingDescription));
}

#[test]
fn submit_checks_title_first() {
    assert_eq!(builder().submit(), Err(DraftError::MissingTitle));
}

#[test]
fn submit_assembles_draft() {
    let mut b = builder();
    b.set_title("  Golden Gate ");
    b.set_description("Bridge at dawn");
    b.set_direction(315.0).unwrap();
    b.add_tag("bridge");
    b.set_photo_url("https://example.com/gg.jpg");

    let draft = b.submit().unwrap();
    assert_eq!(draft.title, "Golden Gate");
    assert_eq!(draft.description, "Bridge at dawn");
    assert_eq!(draft.direction.degrees(), 315.0);
    assert_eq!(draft.tags.as_slice(), ["bridge"]);
    assert_eq!(draft.photo, Some(PhotoSource::Url("https://example.com/gg.jpg".to_owned())));
    assert_eq!(draft.position, LatLng::new(37.8, -122.4));
}

#[test]
fn rejected_submit_leaves_store_untouched() {
    let mut store = crate::store::LocationStore::new();
    let mut b = builder();
    b.set_description("No title here");
    if let Ok(draft) = b.submit() {
        store.add(draft);
    }
    assert!(store.is_empty());
}
