//! Error types module
//!
//! This module provides the error taxonomy used throughout Panopub. Each
//! failure domain (configuration, photo, metadata) has its own enum, and all
//! of them are unified under `PublishError` together with the two remote
//! kinds (`RemoteResponse`, `Transport`).

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for malformed provider responses
    Warn,
    /// Error level - for transport failures
    Error,
}

/// Credential and session-configuration failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API key is missing or empty")]
    MissingApiKey,

    #[error("Access token is missing or empty")]
    MissingAccessToken,

    #[error("Session is not configured: no upload endpoint has been acquired")]
    NotConfigured,

    #[error("Session is closed: a finished or failed session cannot be reused")]
    SessionClosed,
}

/// Photo source failures detected before any upload.
#[derive(Debug, thiserror::Error)]
pub enum PhotoError {
    #[error("Photo is not set")]
    NotSet,

    #[error("Cannot read photo at {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported photo type: {extension:?} (allowed: png, jpg, jpeg)")]
    UnsupportedType { extension: Option<String> },

    #[error("Cannot decode image headers of {path}: {reason}")]
    Undecodable { path: String, reason: String },

    #[error("Image too small: {width}x{height} (minimum: {min_width}x{min_height})")]
    TooSmall {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },
}

/// Pose metadata failures detected before any upload.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("Metadata is not set")]
    NotSet,

    #[error("Metadata is empty")]
    Empty,

    #[error("Missing or empty metadata field: {0}")]
    MissingField(&'static str),

    #[error("Invalid {field} format: {value:?} (expected decimal degrees, up to 6 fractional digits)")]
    InvalidCoordinate { field: &'static str, value: String },

    #[error("{field} out of range: {value} (allowed: [{min}, {max}])")]
    CoordinateOutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Unparseable capture time: {0:?}")]
    UnparseableTimestamp(String),
}

/// Unified error type for the publishing pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid photo: {0}")]
    Photo(#[from] PhotoError),

    #[error("Invalid metadata: {0}")]
    Metadata(#[from] MetadataError),

    #[error("Unexpected provider response: {0}")]
    RemoteResponse(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl From<serde_json::Error> for PublishError {
    fn from(err: serde_json::Error) -> Self {
        PublishError::RemoteResponse(format!("JSON parsing error: {}", err))
    }
}

/// Static metadata per variant: (error_code, recoverable, log_level).
/// Validation errors are expected and local; only transport failures are
/// worth retrying at the caller level.
fn publish_error_static_metadata(err: &PublishError) -> (&'static str, bool, LogLevel) {
    match err {
        PublishError::Config(_) => ("CONFIG_ERROR", false, LogLevel::Debug),
        PublishError::Photo(_) => ("PHOTO_ERROR", false, LogLevel::Debug),
        PublishError::Metadata(_) => ("METADATA_ERROR", false, LogLevel::Debug),
        PublishError::RemoteResponse(_) => ("REMOTE_RESPONSE_ERROR", false, LogLevel::Warn),
        PublishError::Transport(_) => ("TRANSPORT_ERROR", true, LogLevel::Error),
    }
}

impl PublishError {
    /// Machine-readable error code (e.g. "TRANSPORT_ERROR")
    pub fn error_code(&self) -> &'static str {
        publish_error_static_metadata(self).0
    }

    /// Whether this error is recoverable (can be retried by the caller)
    pub fn is_recoverable(&self) -> bool {
        publish_error_static_metadata(self).1
    }

    /// Log level for this error
    pub fn log_level(&self) -> LogLevel {
        publish_error_static_metadata(self).2
    }
}
