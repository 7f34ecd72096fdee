//! Shared test helpers: a counting stub gateway and photo fixtures.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use panopub_client::{
    Credentials, PhotoRecord, PoseMetadata, PublishError, RemoteGateway, UploadEndpoint,
};
use tempfile::TempDir;

/// Stub gateway recording every call. Tests keep an `Arc` clone to inspect
/// counters after the session has consumed the gateway.
#[derive(Default)]
pub struct StubGateway {
    pub upload_url: String,
    pub photo_id: String,
    pub fail_start: bool,
    pub fail_upload: bool,
    pub missing_photo_id: bool,
    pub start_upload_calls: AtomicUsize,
    pub upload_bytes_calls: AtomicUsize,
    pub create_record_calls: AtomicUsize,
    pub uploaded_bytes: AtomicUsize,
    pub recorded_pose: Mutex<Option<PoseMetadata>>,
}

impl StubGateway {
    pub fn happy() -> Arc<Self> {
        Arc::new(Self {
            upload_url: "https://up/x".to_string(),
            photo_id: "ABC123".to_string(),
            ..Self::default()
        })
    }

    pub fn with_missing_photo_id() -> Arc<Self> {
        Arc::new(Self {
            upload_url: "https://up/x".to_string(),
            missing_photo_id: true,
            ..Self::default()
        })
    }

    pub fn with_failing_upload() -> Arc<Self> {
        Arc::new(Self {
            upload_url: "https://up/x".to_string(),
            fail_upload: true,
            ..Self::default()
        })
    }

    pub fn total_calls(&self) -> usize {
        self.start_upload_calls.load(Ordering::SeqCst)
            + self.upload_bytes_calls.load(Ordering::SeqCst)
            + self.create_record_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteGateway for StubGateway {
    async fn start_upload(
        &self,
        _credentials: &Credentials,
    ) -> Result<UploadEndpoint, PublishError> {
        self.start_upload_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_start {
            return Err(PublishError::Transport("startUpload refused".to_string()));
        }
        Ok(UploadEndpoint::new(self.upload_url.clone()))
    }

    async fn upload_bytes(
        &self,
        _endpoint: &UploadEndpoint,
        _credentials: &Credentials,
        data: Vec<u8>,
    ) -> Result<(), PublishError> {
        self.upload_bytes_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_upload {
            return Err(PublishError::Transport("connection reset".to_string()));
        }
        self.uploaded_bytes.store(data.len(), Ordering::SeqCst);
        Ok(())
    }

    async fn create_record(
        &self,
        _endpoint: &UploadEndpoint,
        _credentials: &Credentials,
        pose: &PoseMetadata,
    ) -> Result<PhotoRecord, PublishError> {
        self.create_record_calls.fetch_add(1, Ordering::SeqCst);
        if self.missing_photo_id {
            return Err(PublishError::RemoteResponse(
                "create photo response missing photoId".to_string(),
            ));
        }
        *self.recorded_pose.lock().unwrap() = Some(*pose);
        Ok(PhotoRecord {
            photo_id: self.photo_id.clone(),
        })
    }
}

pub fn credentials() -> Credentials {
    Credentials::new("K", "T")
}

/// Write a grayscale PNG of the given dimensions and return its path.
pub fn write_photo(dir: &TempDir, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.path().join(name);
    image::GrayImage::new(width, height)
        .save(&path)
        .expect("failed to write test image");
    path
}
