//! Validation gates
//!
//! Pure precondition checks for the publishing pipeline. Every gate runs
//! locally and fails with a typed error before any remote call is issued.

pub mod photo;
pub mod pose;

pub use photo::{resolve_photo_source, MIN_PHOTO_HEIGHT, MIN_PHOTO_WIDTH};
pub use pose::validate_metadata;

use crate::config::Credentials;
use crate::error::PublishError;

/// Validate the credential pair. Rejected wholesale if either field is empty.
pub fn validate_credentials(credentials: &Credentials) -> Result<(), PublishError> {
    credentials.validate()
}
