use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raster formats accepted for publishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMime {
    Png,
    Jpeg,
}

impl ImageMime {
    /// Map a lowercase file extension to an accepted mime. Returns `None`
    /// for anything outside png/jpg/jpeg.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "png" => Some(ImageMime::Png),
            "jpg" | "jpeg" => Some(ImageMime::Jpeg),
            _ => None,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ImageMime::Png => "image/png",
            ImageMime::Jpeg => "image/jpeg",
        }
    }
}

/// A photo resolved from disk and accepted for upload.
///
/// Immutable after acceptance: dimensions are probed once, at resolution
/// time, and re-used for the rest of the session.
#[derive(Debug, Clone)]
pub struct PhotoSource {
    pub path: PathBuf,
    pub mime_type: ImageMime,
    pub width: u32,
    pub height: u32,
}

/// Opaque one-time upload handle issued by the provider.
///
/// Valid for exactly one bytes upload; session-scoped, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UploadEndpoint(String);

impl UploadEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Terminal artifact of a successful publish: the durable photo identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRecord {
    pub photo_id: String,
}
