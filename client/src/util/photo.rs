//! Acquisition and release of uploaded photo resources.
//!
//! SYSTEM CONTEXT
//! ==============
//! A picked file is exposed to `<img>` tags through a browser object URL.
//! Object URLs pin the file contents in memory until revoked, so every
//! upload that stops being displayed (replaced, removed, mode switched,
//! dialog cancelled, record deleted) must pass through [`release`].

#[cfg(test)]
#[path = "photo_test.rs"]
mod photo_test;

use spots::record::{PhotoSource, UploadedPhoto};

use crate::consts::MAX_UPLOAD_BYTES;

/// Why a picked file could not be used as a photo.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhotoError {
    #[error("\"{0}\" is not an image file")]
    NotAnImage(String),
    #[error("image is {size} bytes; the limit is {max} bytes")]
    TooLarge { size: u64, max: u64 },
    #[error("could not read the selected file: {0}")]
    Unreadable(String),
}

/// Check a file's MIME type and size before creating a handle for it.
///
/// # Errors
///
/// [`PhotoError::NotAnImage`] for non-`image/*` types and
/// [`PhotoError::TooLarge`] above [`MAX_UPLOAD_BYTES`].
pub fn validate_upload(mime: &str, size: u64) -> Result<(), PhotoError> {
    if !mime.starts_with("image/") {
        return Err(PhotoError::NotAnImage(mime.to_owned()));
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(PhotoError::TooLarge { size, max: MAX_UPLOAD_BYTES });
    }
    Ok(())
}

/// Validate `file` and create an object URL for it.
///
/// # Errors
///
/// Validation errors from [`validate_upload`], or [`PhotoError::Unreadable`]
/// when the browser refuses to create the URL.
#[cfg(feature = "hydrate")]
pub fn acquire(file: &web_sys::File) -> Result<UploadedPhoto, PhotoError> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let size = file.size().max(0.0) as u64;
    validate_upload(&file.type_(), size)?;
    let object_url = web_sys::Url::create_object_url_with_blob(file)
        .map_err(|err| PhotoError::Unreadable(format!("{err:?}")))?;
    log::debug!("acquired photo {} as {object_url}", file.name());
    Ok(UploadedPhoto { file_name: file.name(), object_url })
}

/// Revoke the object URL behind an upload.
pub fn release(photo: &UploadedPhoto) {
    #[cfg(feature = "hydrate")]
    {
        if let Err(err) = web_sys::Url::revoke_object_url(&photo.object_url) {
            log::warn!("failed to revoke {}: {err:?}", photo.object_url);
        } else {
            log::debug!("released photo {}", photo.file_name);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!("released photo {}", photo.file_name);
    }
}

/// Release `source` if it holds an upload; remote URLs need no cleanup.
pub fn release_source(source: Option<&PhotoSource>) {
    if let Some(photo) = source.and_then(PhotoSource::as_upload) {
        release(photo);
    }
}
