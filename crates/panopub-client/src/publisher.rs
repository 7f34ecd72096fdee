//! Photo publisher
//!
//! Fluent public surface over the upload session: construct with
//! configuration (which acquires the upload endpoint), then
//! `.photo(path)`, `.metadata(fields)`, `.upload()`. Each step validates
//! before proceeding; calling `.upload()` before binding a photo or
//! metadata fails deterministically instead of silently proceeding.

use std::path::Path;

use panopub_core::{ClientConfig, Credentials, MetadataFields, PublishError};

use crate::gateway::RemoteGateway;
use crate::http::HttpGateway;
use crate::session::UploadSession;

/// Public entry point for publishing a single photo.
pub struct PhotoPublisher<G: RemoteGateway> {
    session: UploadSession<G>,
}

impl PhotoPublisher<HttpGateway> {
    /// Build a publisher backed by the HTTP gateway and acquire the upload
    /// endpoint.
    pub async fn connect(config: &ClientConfig) -> Result<Self, PublishError> {
        let gateway = HttpGateway::from_config(config)?;
        Self::with_gateway(gateway, config.credentials().clone()).await
    }
}

impl<G: RemoteGateway> PhotoPublisher<G> {
    /// Build a publisher over any gateway implementation. Validates the
    /// credentials and drives the session's endpoint acquisition.
    pub async fn with_gateway(gateway: G, credentials: Credentials) -> Result<Self, PublishError> {
        let mut session = UploadSession::new(gateway, credentials)?;
        session.configure().await?;
        Ok(Self { session })
    }

    /// Bind the photo to publish.
    pub fn photo(mut self, path: impl AsRef<Path>) -> Result<Self, PublishError> {
        self.session.set_photo(path.as_ref())?;
        Ok(self)
    }

    /// Bind pose metadata.
    pub fn metadata(mut self, fields: &MetadataFields) -> Result<Self, PublishError> {
        self.session.set_metadata(fields)?;
        Ok(self)
    }

    /// Upload the bound photo and register its record, returning the durable
    /// photo identifier. Consumes the publisher: a record is created at most
    /// once per session.
    pub async fn upload(mut self) -> Result<String, PublishError> {
        self.session.execute().await
    }

    pub fn session(&self) -> &UploadSession<G> {
        &self.session
    }
}
