//! Photo source validation
//!
//! Resolves a path into an accepted `PhotoSource`: extension gate, header
//! probe, and minimum-dimension check. A file whose headers cannot be
//! decoded is always rejected, the same as a non-raster file.

use std::path::Path;

use image::ImageReader;

use crate::error::{PhotoError, PublishError};
use crate::models::{ImageMime, PhotoSource};

/// Minimum accepted width in pixels (7.5-megapixel / 2:1 floor).
pub const MIN_PHOTO_WIDTH: u32 = 4096;
/// Minimum accepted height in pixels.
pub const MIN_PHOTO_HEIGHT: u32 = 2048;

/// Resolve and validate a photo at `path`.
///
/// Fails with `PhotoError` if the path is unreadable, the extension is not
/// png/jpg/jpeg, the image headers cannot be decoded, or the pixel
/// dimensions fall below the minimum thresholds. Only headers are read; the
/// raster itself is never decoded here.
pub fn resolve_photo_source(path: &Path) -> Result<PhotoSource, PublishError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    let mime_type = extension
        .as_deref()
        .and_then(ImageMime::from_extension)
        .ok_or(PhotoError::UnsupportedType { extension })?;

    let reader = ImageReader::open(path)
        .map_err(|source| PhotoError::Unreadable {
            path: path.display().to_string(),
            source,
        })?
        .with_guessed_format()
        .map_err(|source| PhotoError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;

    let (width, height) = reader
        .into_dimensions()
        .map_err(|err| PhotoError::Undecodable {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;

    if width < MIN_PHOTO_WIDTH || height < MIN_PHOTO_HEIGHT {
        return Err(PhotoError::TooSmall {
            width,
            height,
            min_width: MIN_PHOTO_WIDTH,
            min_height: MIN_PHOTO_HEIGHT,
        }
        .into());
    }

    tracing::debug!(
        path = %path.display(),
        width = width,
        height = height,
        "Photo source accepted"
    );

    Ok(PhotoSource {
        path: path.to_path_buf(),
        mime_type,
        width,
        height,
    })
}
