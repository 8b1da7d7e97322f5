//! Draft builder behind the "Add Photo Location" form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form accumulates field edits here and calls [`DraftBuilder::submit`]
//! on save. A successful submit yields a [`LocationDraft`] that the caller
//! passes to the store; the builder never touches the store itself.
//!
//! Uploaded photos are browser resources that must be released when they
//! stop being displayed. Every operation that discards a pending upload
//! returns it so the caller can release the handle.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use crate::error::DraftError;
use crate::record::{Direction, LatLng, LocationDraft, PhotoSource, TagSet, UploadedPhoto};

/// Which photo input is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PhotoMode {
    /// A file picked from the local machine.
    #[default]
    Upload,
    /// A remote image URL.
    Url,
}

/// Field-by-field builder for a new location anchored at a fixed position.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftBuilder {
    position: LatLng,
    title: String,
    description: String,
    direction: Direction,
    tags: TagSet,
    photo_mode: PhotoMode,
    pending_upload: Option<UploadedPhoto>,
    pending_url: String,
}

impl DraftBuilder {
    /// Start an empty draft at `position`.
    #[must_use]
    pub fn new(position: LatLng) -> Self {
        Self {
            position,
            title: String::new(),
            description: String::new(),
            direction: Direction::default(),
            tags: TagSet::new(),
            photo_mode: PhotoMode::default(),
            pending_upload: None,
            pending_url: String::new(),
        }
    }

    #[must_use]
    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Set the heading. The previous value is kept on error.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::DirectionOutOfRange`] outside `[0, 360]`.
    pub fn set_direction(&mut self, degrees: f64) -> Result<(), DraftError> {
        self.direction = Direction::new(degrees)?;
        Ok(())
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Add a trimmed tag. Empty and duplicate tags are ignored.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        self.tags.insert(tag)
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.tags.remove(tag)
    }

    #[must_use]
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    #[must_use]
    pub fn photo_mode(&self) -> PhotoMode {
        self.photo_mode
    }

    /// Switch photo input mode, dropping the other mode's pending value.
    ///
    /// Returns the pending upload when switching away from upload mode.
    pub fn set_photo_mode(&mut self, mode: PhotoMode) -> Option<UploadedPhoto> {
        if mode == self.photo_mode {
            return None;
        }
        self.photo_mode = mode;
        match mode {
            PhotoMode::Upload => {
                self.pending_url.clear();
                None
            }
            PhotoMode::Url => self.pending_upload.take(),
        }
    }

    /// Use an uploaded photo, switching to upload mode if needed.
    ///
    /// Returns the upload this one replaces.
    pub fn set_upload(&mut self, photo: UploadedPhoto) -> Option<UploadedPhoto> {
        self.photo_mode = PhotoMode::Upload;
        self.pending_url.clear();
        self.pending_upload.replace(photo)
    }

    /// Drop the pending upload, returning it for release.
    pub fn clear_upload(&mut self) -> Option<UploadedPhoto> {
        self.pending_upload.take()
    }

    #[must_use]
    pub fn pending_upload(&self) -> Option<&UploadedPhoto> {
        self.pending_upload.as_ref()
    }

    /// Use a remote photo URL, switching to URL mode if needed.
    ///
    /// Returns the upload discarded by the mode switch, if any.
    pub fn set_photo_url(&mut self, url: impl Into<String>) -> Option<UploadedPhoto> {
        let discarded = self.set_photo_mode(PhotoMode::Url);
        self.pending_url = url.into();
        discarded
    }

    #[must_use]
    pub fn photo_url(&self) -> &str {
        &self.pending_url
    }

    /// The photo that would be saved right now.
    #[must_use]
    pub fn photo(&self) -> Option<PhotoSource> {
        match self.photo_mode {
            PhotoMode::Upload => self.pending_upload.clone().map(PhotoSource::Upload),
            PhotoMode::Url => {
                let url = self.pending_url.trim();
                if url.is_empty() {
                    None
                } else {
                    Some(PhotoSource::Url(url.to_owned()))
                }
            }
        }
    }

    /// Validate required fields and assemble the draft.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::MissingTitle`] or [`DraftError::MissingDescription`]
    /// when the field is empty after trimming. Title is checked first.
    pub fn submit(&self) -> Result<LocationDraft, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::MissingTitle);
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(DraftError::MissingDescription);
        }
        Ok(LocationDraft {
            title: title.to_owned(),
            description: description.to_owned(),
            photo: self.photo(),
            direction: self.direction,
            tags: self.tags.clone(),
            position: self.position,
        })
    }

    /// Abandon the draft, returning any upload that still needs releasing.
    #[must_use]
    pub fn discard(self) -> Option<UploadedPhoto> {
        self.pending_upload
    }
}
