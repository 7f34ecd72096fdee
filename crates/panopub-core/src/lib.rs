//! Panopub Core Library
//!
//! This crate provides the domain models, error taxonomy, configuration, and
//! validation gates shared across all Panopub components. Everything here is
//! local: no module in this crate performs a network call.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::{ClientConfig, Credentials, DEFAULT_BASE_URL};
pub use error::{ConfigError, LogLevel, MetadataError, PhotoError, PublishError};
pub use models::{
    ImageMime, MetadataFields, PhotoRecord, PhotoSource, PoseMetadata, UploadEndpoint,
};
pub use validation::{
    resolve_photo_source, validate_credentials, validate_metadata, MIN_PHOTO_HEIGHT,
    MIN_PHOTO_WIDTH,
};
