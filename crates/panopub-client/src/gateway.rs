//! Remote gateway abstraction
//!
//! This module defines the contract for the three remote operations the
//! session drives. The session never inspects transport details (headers,
//! retries, TLS); it only consumes success/failure and the typed payload.
//! Retry policy, if any, belongs to the gateway implementation.

use std::sync::Arc;

use async_trait::async_trait;
use panopub_core::{Credentials, PhotoRecord, PoseMetadata, PublishError, UploadEndpoint};

/// The three remote operations of the publishing protocol.
///
/// Each call is a suspending point; the session issues at most one
/// outstanding call at a time and awaits completion before the next
/// transition.
#[async_trait]
pub trait RemoteGateway: Send + Sync {
    /// Request a one-time upload endpoint from the provider.
    async fn start_upload(
        &self,
        credentials: &Credentials,
    ) -> Result<UploadEndpoint, PublishError>;

    /// Transmit raw image bytes to the bound endpoint.
    async fn upload_bytes(
        &self,
        endpoint: &UploadEndpoint,
        credentials: &Credentials,
        data: Vec<u8>,
    ) -> Result<(), PublishError>;

    /// Register pose metadata against the uploaded bytes, yielding the
    /// durable photo record.
    async fn create_record(
        &self,
        endpoint: &UploadEndpoint,
        credentials: &Credentials,
        pose: &PoseMetadata,
    ) -> Result<PhotoRecord, PublishError>;
}

#[async_trait]
impl<T: RemoteGateway + ?Sized> RemoteGateway for Arc<T> {
    async fn start_upload(
        &self,
        credentials: &Credentials,
    ) -> Result<UploadEndpoint, PublishError> {
        (**self).start_upload(credentials).await
    }

    async fn upload_bytes(
        &self,
        endpoint: &UploadEndpoint,
        credentials: &Credentials,
        data: Vec<u8>,
    ) -> Result<(), PublishError> {
        (**self).upload_bytes(endpoint, credentials, data).await
    }

    async fn create_record(
        &self,
        endpoint: &UploadEndpoint,
        credentials: &Credentials,
        pose: &PoseMetadata,
    ) -> Result<PhotoRecord, PublishError> {
        (**self).create_record(endpoint, credentials, pose).await
    }
}
