//! Pose metadata validation
//!
//! Coordinate format and range checks plus capture-time normalization.
//! Coordinates must be canonical decimal degrees: optional sign, up to three
//! integer digits, up to six fractional digits. Capture times may be epoch
//! seconds or any of the supported date/time formats and are always stored
//! as epoch seconds.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::error::{MetadataError, PublishError};
use crate::models::{MetadataFields, PoseMetadata};

fn coordinate_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[+-]?\d{1,3}(\.\d{1,6})?$").expect("valid coordinate regex"))
}

fn epoch_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[+-]?\d+$").expect("valid epoch regex"))
}

/// Validate raw metadata fields into accepted pose metadata.
pub fn validate_metadata(fields: &MetadataFields) -> Result<PoseMetadata, PublishError> {
    if fields.is_empty() {
        return Err(MetadataError::Empty.into());
    }

    let latitude = parse_coordinate(fields.latitude.as_deref(), "latitude", -90.0, 90.0)?;
    let longitude = parse_coordinate(fields.longitude.as_deref(), "longitude", -180.0, 180.0)?;
    let captured_at = normalize_capture_time(fields.created.as_deref())?;

    Ok(PoseMetadata {
        latitude,
        longitude,
        captured_at,
    })
}

fn parse_coordinate(
    raw: Option<&str>,
    field: &'static str,
    min: f64,
    max: f64,
) -> Result<f64, PublishError> {
    let raw = match raw {
        Some(value) if !value.trim().is_empty() => value.trim(),
        _ => return Err(MetadataError::MissingField(field).into()),
    };

    if !coordinate_regex().is_match(raw) {
        return Err(MetadataError::InvalidCoordinate {
            field,
            value: raw.to_string(),
        }
        .into());
    }

    let value: f64 = raw.parse().map_err(|_| MetadataError::InvalidCoordinate {
        field,
        value: raw.to_string(),
    })?;

    if !(min..=max).contains(&value) {
        return Err(MetadataError::CoordinateOutOfRange {
            field,
            value,
            min,
            max,
        }
        .into());
    }

    Ok(value)
}

/// Normalize a capture time expression to epoch seconds.
///
/// All-digit input (optionally signed) passes through as epoch seconds.
/// Anything else is parsed as RFC 3339 or one of the common date/time
/// layouts, interpreted as UTC when no offset is given.
fn normalize_capture_time(raw: Option<&str>) -> Result<i64, PublishError> {
    let raw = match raw {
        Some(value) if !value.trim().is_empty() => value.trim(),
        _ => return Err(MetadataError::MissingField("created").into()),
    };

    if epoch_regex().is_match(raw) {
        return raw
            .parse::<i64>()
            .map_err(|_| MetadataError::UnparseableTimestamp(raw.to_string()).into());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.timestamp());
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc().timestamp());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc().timestamp());
        }
    }

    Err(MetadataError::UnparseableTimestamp(raw.to_string()).into())
}
