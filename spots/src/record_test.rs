#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Direction
// =============================================================

#[test]
fn direction_accepts_bounds() {
    assert_eq!(Direction::new(0.0).unwrap().degrees(), 0.0);
    assert_eq!(Direction::new(360.0).unwrap().degrees(), 360.0);
    assert_eq!(Direction::new(127.5).unwrap().degrees(), 127.5);
}

#[test]
fn direction_rejects_out_of_range_without_wrapping() {
    assert_eq!(Direction::new(370.0), Err(DraftError::DirectionOutOfRange(370.0)));
    assert_eq!(Direction::new(-1.0), Err(DraftError::DirectionOutOfRange(-1.0)));
}

#[test]
fn direction_rejects_non_finite() {
    assert!(Direction::new(f64::NAN).is_err());
    assert!(Direction::new(f64::INFINITY).is_err());
}

#[test]
fn direction_default_is_zero() {
    assert_eq!(Direction::default().degrees(), 0.0);
}

#[test]
fn direction_display_has_degree_sign() {
    assert_eq!(Direction::new(45.0).unwrap().to_string(), "45°");
    assert_eq!(Direction::new(12.5).unwrap().to_string(), "12.5°");
}

// =============================================================
// TagSet
// =============================================================

#[test]
fn tags_keep_insertion_order() {
    let tags: TagSet = ["bridge", "sunset", "fog"].into_iter().collect();
    assert_eq!(tags.as_slice(), ["bridge", "sunset", "fog"]);
}

#[test]
fn tags_trim_and_skip_empty() {
    let mut tags = TagSet::new();
    assert!(tags.insert("  night  "));
    assert!(!tags.insert("   "));
    assert!(!tags.insert(""));
    assert_eq!(tags.as_slice(), ["night"]);
}

#[test]
fn tags_suppress_exact_duplicates() {
    let mut tags = TagSet::new();
    assert!(tags.insert("landscape"));
    assert!(!tags.insert("landscape"));
    assert!(!tags.insert(" landscape "));
    assert_eq!(tags.len(), 1);
}

#[test]
fn tags_compare_case_sensitively() {
    let mut tags = TagSet::new();
    assert!(tags.insert("Sunset"));
    assert!(tags.insert("sunset"));
    assert_eq!(tags.len(), 2);
}

#[test]
fn tags_remove_by_exact_value() {
    let mut tags: TagSet = ["city", "night"].into_iter().collect();
    assert!(!tags.remove("City"));
    assert!(tags.remove("city"));
    assert!(!tags.contains("city"));
    assert_eq!(tags.as_slice(), ["night"]);
}

// =============================================================
// PhotoSource
// =============================================================

#[test]
fn photo_src_for_url_and_upload() {
    let url = PhotoSource::Url("https://example.com/a.jpg".to_owned());
    assert_eq!(url.src(), "https://example.com/a.jpg");
    assert!(url.as_upload().is_none());

    let upload = PhotoSource::Upload(UploadedPhoto {
        file_name: "a.jpg".to_owned(),
        object_url: "blob:http://localhost/1".to_owned(),
    });
    assert_eq!(upload.src(), "blob:http://localhost/1");
    assert_eq!(upload.as_upload().map(|p| p.file_name.as_str()), Some("a.jpg"));
}

// =============================================================
// LocationDraft / LocationRecord
// =============================================================

#[test]
fn draft_at_starts_empty() {
    let draft = LocationDraft::at(LatLng::new(37.8, -122.4));
    assert!(draft.title.is_empty());
    assert!(draft.description.is_empty());
    assert!(draft.photo.is_none());
    assert!(draft.tags.is_empty());
    assert_eq!(draft.direction.degrees(), 0.0);
    assert_eq!(draft.position, LatLng::new(37.8, -122.4));
}

#[test]
fn record_from_draft_copies_fields() {
    let mut draft = LocationDraft::at(LatLng::new(1.0, 2.0));
    draft.title = "Pier".to_owned();
    draft.description = "Long exposure".to_owned();
    draft.tags.insert("water");
    let id = LocationId::generate();
    let record = LocationRecord::from_draft(id, draft);
    assert_eq!(record.id(), id);
    assert_eq!(record.title(), "Pier");
    assert_eq!(record.description(), "Long exposure");
    assert_eq!(record.tags().as_slice(), ["water"]);
    assert_eq!(record.position(), LatLng::new(1.0, 2.0));
}

#[test]
fn location_id_display_is_uuid() {
    let id = LocationId::generate();
    assert_eq!(id.to_string(), id.as_uuid().to_string());
}
