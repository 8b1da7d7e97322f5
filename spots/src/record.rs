//! Record and value types for saved photo locations.
//!
//! A location starts life as a [`LocationDraft`] (no identifier) inside the
//! entry form and becomes a [`LocationRecord`] when the store assigns it a
//! [`LocationId`]. Records expose read-only accessors only; the store hands
//! out shared references, so a stored position can never be changed.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use std::fmt;

use uuid::Uuid;

use crate::error::DraftError;

/// Unique identifier for a stored location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(Uuid);

impl LocationId {
    /// Generate a fresh random identifier.
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatLng {
    /// Latitude, positive north.
    pub lat: f64,
    /// Longitude, positive east.
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Compass heading the photo was taken towards, in degrees.
///
/// Always within `[0, 360]`. Out-of-range input is rejected rather than
/// wrapped, so `370` is an error and not `10`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Direction(f64);

impl Direction {
    /// Smallest accepted heading.
    pub const MIN: f64 = 0.0;
    /// Largest accepted heading.
    pub const MAX: f64 = 360.0;

    /// Validate and wrap a heading in degrees.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::DirectionOutOfRange`] for values outside
    /// `[0, 360]` and for NaN or infinite input.
    pub fn new(degrees: f64) -> Result<Self, DraftError> {
        if degrees.is_finite() && (Self::MIN..=Self::MAX).contains(&degrees) {
            Ok(Self(degrees))
        } else {
            Err(DraftError::DirectionOutOfRange(degrees))
        }
    }

    #[must_use]
    pub fn degrees(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Ordered set of free-text labels.
///
/// Entries are trimmed on insert. Empty entries and exact (case-sensitive)
/// duplicates are ignored, so `"Sunset"` and `"sunset"` may coexist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagSet(Vec<String>);

impl TagSet {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert a tag. Returns `true` if it was added.
    pub fn insert(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.0.push(tag.to_owned());
        true
    }

    /// Remove a tag by exact value. Returns `true` if it was present.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t != tag);
        self.0.len() != before
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = Self::new();
        for tag in iter {
            tags.insert(tag.as_ref());
        }
        tags
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A photo chosen from the local machine and held by the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedPhoto {
    /// Original file name, for alt text and display.
    pub file_name: String,
    /// Displayable handle for the file contents (a browser object URL).
    /// Whoever drops the last reference is responsible for releasing it.
    pub object_url: String,
}

/// Where a location's photo comes from. Exactly one source is authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoSource {
    /// Remote image or post reference.
    Url(String),
    /// Locally uploaded image resource.
    Upload(UploadedPhoto),
}

impl PhotoSource {
    /// Value suitable for an `<img src>`.
    #[must_use]
    pub fn src(&self) -> &str {
        match self {
            Self::Url(url) => url,
            Self::Upload(photo) => &photo.object_url,
        }
    }

    /// The uploaded resource, if this source holds one.
    #[must_use]
    pub fn as_upload(&self) -> Option<&UploadedPhoto> {
        match self {
            Self::Url(_) => None,
            Self::Upload(photo) => Some(photo),
        }
    }
}

/// A location before the store has assigned it an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationDraft {
    pub title: String,
    pub description: String,
    pub photo: Option<PhotoSource>,
    pub direction: Direction,
    pub tags: TagSet,
    pub position: LatLng,
}

impl LocationDraft {
    /// An empty draft anchored at `position`.
    #[must_use]
    pub fn at(position: LatLng) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            photo: None,
            direction: Direction::default(),
            tags: TagSet::new(),
            position,
        }
    }
}

/// A stored location. Only the store creates these.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    id: LocationId,
    title: String,
    description: String,
    photo: Option<PhotoSource>,
    direction: Direction,
    tags: TagSet,
    position: LatLng,
}

impl LocationRecord {
    pub(crate) fn from_draft(id: LocationId, draft: LocationDraft) -> Self {
        let LocationDraft { title, description, photo, direction, tags, position } = draft;
        Self { id, title, description, photo, direction, tags, position }
    }

    #[must_use]
    pub fn id(&self) -> LocationId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn photo(&self) -> Option<&PhotoSource> {
        self.photo.as_ref()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    #[must_use]
    pub fn position(&self) -> LatLng {
        self.position
    }
}
