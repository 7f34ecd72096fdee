//! Upload session state machine
//!
//! A session moves strictly forward through
//! `Configured -> EndpointAcquired -> BytesSent -> RecordCreated`, or into
//! the terminal `Failed` state when a remote call fails. The endpoint is
//! bound once and never re-acquired; the record is created at most once, and
//! only after the bytes upload completed against the bound endpoint.
//!
//! Session state is exclusively owned by the instance and mutated only
//! through the validated setters; sharing a session across tasks without
//! external synchronization is unsupported.

use std::path::Path;

use panopub_core::{
    resolve_photo_source, validate_credentials, validate_metadata, ConfigError, Credentials,
    MetadataError, MetadataFields, PhotoError, PhotoSource, PoseMetadata, PublishError,
    UploadEndpoint,
};

use crate::gateway::RemoteGateway;

/// Lifecycle phase of an upload session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Credentials accepted, no endpoint bound yet.
    Configured,
    /// One-time upload endpoint bound.
    EndpointAcquired,
    /// Photo bytes transmitted to the bound endpoint.
    BytesSent,
    /// Photo record created; terminal success.
    RecordCreated,
    /// Terminal failure; the session cannot be reused.
    Failed,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::RecordCreated | SessionState::Failed)
    }
}

/// Stateful orchestration of a single photo publish.
pub struct UploadSession<G: RemoteGateway> {
    gateway: G,
    credentials: Credentials,
    state: SessionState,
    endpoint: Option<UploadEndpoint>,
    photo: Option<PhotoSource>,
    pose: Option<PoseMetadata>,
}

impl<G: RemoteGateway> UploadSession<G> {
    /// Create a session. Credentials are validated wholesale; a session is
    /// never constructed around missing or empty credentials.
    pub fn new(gateway: G, credentials: Credentials) -> Result<Self, PublishError> {
        validate_credentials(&credentials)?;
        Ok(Self {
            gateway,
            credentials,
            state: SessionState::Configured,
            endpoint: None,
            photo: None,
            pose: None,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn endpoint(&self) -> Option<&UploadEndpoint> {
        self.endpoint.as_ref()
    }

    pub fn photo(&self) -> Option<&PhotoSource> {
        self.photo.as_ref()
    }

    pub fn metadata(&self) -> Option<&PoseMetadata> {
        self.pose.as_ref()
    }

    /// Acquire the one-time upload endpoint.
    ///
    /// Idempotent per session: once an endpoint is bound it is cached and
    /// never re-requested, even if called again. A transport failure moves
    /// the session to `Failed`.
    pub async fn configure(&mut self) -> Result<(), PublishError> {
        self.ensure_open()?;
        validate_credentials(&self.credentials)?;

        if self.endpoint.is_some() {
            return Ok(());
        }

        match self.gateway.start_upload(&self.credentials).await {
            Ok(endpoint) => {
                tracing::debug!(endpoint = %endpoint.as_str(), "Session endpoint acquired");
                self.endpoint = Some(endpoint);
                self.state = SessionState::EndpointAcquired;
                Ok(())
            }
            Err(err) => {
                self.fail(&err);
                Err(err)
            }
        }
    }

    /// Resolve and bind the photo to upload.
    ///
    /// Allowed from any pre-terminal state; orthogonal to the endpoint/bytes/
    /// record progression. A rejected photo leaves the previous binding and
    /// the session phase untouched.
    pub fn set_photo(&mut self, path: &Path) -> Result<(), PublishError> {
        self.ensure_open()?;
        let source = resolve_photo_source(path)?;
        self.photo = Some(source);
        Ok(())
    }

    /// Validate and bind pose metadata. Same orthogonality as `set_photo`.
    pub fn set_metadata(&mut self, fields: &MetadataFields) -> Result<(), PublishError> {
        self.ensure_open()?;
        let pose = validate_metadata(fields)?;
        self.pose = Some(pose);
        Ok(())
    }

    /// Run the remote phase: bytes upload, then record creation.
    ///
    /// Preconditions are checked locally first; an unmet precondition fails
    /// with the corresponding error and issues zero gateway calls. Any
    /// remote failure moves the session to `Failed`.
    pub async fn execute(&mut self) -> Result<String, PublishError> {
        self.ensure_open()?;

        let endpoint = self
            .endpoint
            .clone()
            .ok_or(ConfigError::NotConfigured)
            .map_err(PublishError::from)?;
        let photo = self
            .photo
            .clone()
            .ok_or(PhotoError::NotSet)
            .map_err(PublishError::from)?;
        let pose = self
            .pose
            .ok_or(MetadataError::NotSet)
            .map_err(PublishError::from)?;

        let data = std::fs::read(&photo.path).map_err(|source| {
            PublishError::from(PhotoError::Unreadable {
                path: photo.path.display().to_string(),
                source,
            })
        })?;

        if let Err(err) = self
            .gateway
            .upload_bytes(&endpoint, &self.credentials, data)
            .await
        {
            self.fail(&err);
            return Err(err);
        }
        self.state = SessionState::BytesSent;
        tracing::debug!(endpoint = %endpoint.as_str(), "Photo bytes sent");

        let record = match self
            .gateway
            .create_record(&endpoint, &self.credentials, &pose)
            .await
        {
            Ok(record) => record,
            Err(err) => {
                self.fail(&err);
                return Err(err);
            }
        };
        self.state = SessionState::RecordCreated;

        tracing::info!(
            photo_id = %record.photo_id,
            latitude = pose.latitude,
            longitude = pose.longitude,
            "Photo record created"
        );
        Ok(record.photo_id)
    }

    fn ensure_open(&self) -> Result<(), PublishError> {
        if self.state.is_terminal() {
            return Err(ConfigError::SessionClosed.into());
        }
        Ok(())
    }

    fn fail(&mut self, err: &PublishError) {
        tracing::error!(error_code = err.error_code(), error = %err, "Session failed");
        self.state = SessionState::Failed;
    }
}
