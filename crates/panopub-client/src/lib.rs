//! Panopub client
//!
//! Client orchestrator for the two-phase photo-publishing protocol: acquire
//! a one-time upload endpoint, transmit the image bytes, then register pose
//! metadata to obtain a durable photo identifier. The `UploadSession` state
//! machine enforces ordering and exactly-once execution of the three remote
//! operations; the `RemoteGateway` trait abstracts the transport so tests
//! can run against a stub.

pub mod gateway;
pub mod http;
pub mod publisher;
pub mod session;

// Re-export commonly used types
pub use gateway::RemoteGateway;
pub use http::HttpGateway;
pub use publisher::PhotoPublisher;
pub use session::{SessionState, UploadSession};

pub use panopub_core::{
    ClientConfig, ConfigError, Credentials, ImageMime, MetadataError, MetadataFields, PhotoError,
    PhotoRecord, PhotoSource, PoseMetadata, PublishError, UploadEndpoint,
};
