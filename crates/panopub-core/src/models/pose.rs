use serde::Deserialize;

/// Raw metadata as supplied by a caller, before validation.
///
/// Fields are strings on purpose: coordinates and capture time commonly
/// arrive from config files or form input and are normalized by
/// `validation::validate_metadata`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetadataFields {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub created: Option<String>,
}

impl MetadataFields {
    pub fn new(
        latitude: impl Into<String>,
        longitude: impl Into<String>,
        created: impl Into<String>,
    ) -> Self {
        Self {
            latitude: Some(latitude.into()),
            longitude: Some(longitude.into()),
            created: Some(created.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.latitude.is_none() && self.longitude.is_none() && self.created.is_none()
    }
}

/// Validated pose metadata attached to a photo record.
///
/// Immutable after acceptance. `captured_at` is always epoch seconds,
/// regardless of the format the capture time was supplied in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseMetadata {
    /// Decimal degrees in [-90, 90]
    pub latitude: f64,
    /// Decimal degrees in [-180, 180]
    pub longitude: f64,
    /// Capture time as epoch seconds
    pub captured_at: i64,
}
