//! Domain models

pub mod photo;
pub mod pose;

pub use photo::{ImageMime, PhotoRecord, PhotoSource, UploadEndpoint};
pub use pose::{MetadataFields, PoseMetadata};
