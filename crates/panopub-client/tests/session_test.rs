mod helpers;

use std::sync::atomic::Ordering;

use helpers::{credentials, write_photo, StubGateway};
use panopub_client::{
    ConfigError, Credentials, MetadataError, MetadataFields, PhotoError, PublishError,
    SessionState, UploadSession,
};
use tempfile::TempDir;

#[tokio::test]
async fn session_rejects_empty_credentials_without_remote_calls() {
    let gateway = StubGateway::happy();

    let result = UploadSession::new(gateway.clone(), Credentials::new("", "T"));
    assert!(matches!(
        result,
        Err(PublishError::Config(ConfigError::MissingApiKey))
    ));

    let result = UploadSession::new(gateway.clone(), Credentials::new("K", ""));
    assert!(matches!(
        result,
        Err(PublishError::Config(ConfigError::MissingAccessToken))
    ));

    assert_eq!(gateway.total_calls(), 0);
}

#[tokio::test]
async fn execute_before_configure_fails_with_config_error_and_zero_calls() {
    let gateway = StubGateway::happy();
    let mut session = UploadSession::new(gateway.clone(), credentials()).unwrap();

    let result = session.execute().await;
    assert!(matches!(
        result,
        Err(PublishError::Config(ConfigError::NotConfigured))
    ));
    assert_eq!(gateway.total_calls(), 0);
    assert_eq!(session.state(), SessionState::Configured);
}

#[tokio::test]
async fn execute_before_set_photo_fails_with_photo_error() {
    let gateway = StubGateway::happy();
    let mut session = UploadSession::new(gateway.clone(), credentials()).unwrap();
    session.configure().await.unwrap();

    let result = session.execute().await;
    assert!(matches!(
        result,
        Err(PublishError::Photo(PhotoError::NotSet))
    ));
    assert_eq!(gateway.upload_bytes_calls.load(Ordering::SeqCst), 0);
    assert_eq!(gateway.create_record_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn execute_before_set_metadata_fails_with_metadata_error() {
    let dir = TempDir::new().unwrap();
    let photo = write_photo(&dir, "pano.png", 4096, 2048);

    let gateway = StubGateway::happy();
    let mut session = UploadSession::new(gateway.clone(), credentials()).unwrap();
    session.configure().await.unwrap();
    session.set_photo(&photo).unwrap();

    let result = session.execute().await;
    assert!(matches!(
        result,
        Err(PublishError::Metadata(MetadataError::NotSet))
    ));
    assert_eq!(gateway.upload_bytes_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn full_publish_yields_photo_id() {
    let dir = TempDir::new().unwrap();
    let photo = write_photo(&dir, "pano.png", 5000, 2500);
    let photo_len = std::fs::metadata(&photo).unwrap().len() as usize;

    let gateway = StubGateway::happy();
    let mut session = UploadSession::new(gateway.clone(), credentials()).unwrap();
    session.configure().await.unwrap();
    assert_eq!(session.state(), SessionState::EndpointAcquired);

    session.set_photo(&photo).unwrap();
    session
        .set_metadata(&MetadataFields::new("21.2", "-73.4", "1000000000"))
        .unwrap();

    let photo_id = session.execute().await.unwrap();
    assert_eq!(photo_id, "ABC123");
    assert_eq!(session.state(), SessionState::RecordCreated);

    assert_eq!(gateway.start_upload_calls.load(Ordering::SeqCst), 1);
    assert_eq!(gateway.upload_bytes_calls.load(Ordering::SeqCst), 1);
    assert_eq!(gateway.create_record_calls.load(Ordering::SeqCst), 1);
    assert_eq!(gateway.uploaded_bytes.load(Ordering::SeqCst), photo_len);

    let pose = gateway.recorded_pose.lock().unwrap().unwrap();
    assert_eq!(pose.latitude, 21.2);
    assert_eq!(pose.longitude, -73.4);
    assert_eq!(pose.captured_at, 1_000_000_000);
}

#[tokio::test]
async fn missing_photo_id_fails_with_remote_response_and_closes_session() {
    let dir = TempDir::new().unwrap();
    let photo = write_photo(&dir, "pano.png", 4096, 2048);

    let gateway = StubGateway::with_missing_photo_id();
    let mut session = UploadSession::new(gateway.clone(), credentials()).unwrap();
    session.configure().await.unwrap();
    session.set_photo(&photo).unwrap();
    session
        .set_metadata(&MetadataFields::new("0", "0", "0"))
        .unwrap();

    let result = session.execute().await;
    assert!(matches!(result, Err(PublishError::RemoteResponse(_))));
    assert_eq!(session.state(), SessionState::Failed);

    // A failed session is terminal; nothing further reaches the gateway.
    let result = session.execute().await;
    assert!(matches!(
        result,
        Err(PublishError::Config(ConfigError::SessionClosed))
    ));
    assert_eq!(gateway.upload_bytes_calls.load(Ordering::SeqCst), 1);
    assert_eq!(gateway.create_record_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn configure_twice_issues_single_start_upload() {
    let gateway = StubGateway::happy();
    let mut session = UploadSession::new(gateway.clone(), credentials()).unwrap();

    session.configure().await.unwrap();
    let endpoint = session.endpoint().cloned();
    session.configure().await.unwrap();

    assert_eq!(gateway.start_upload_calls.load(Ordering::SeqCst), 1);
    assert_eq!(session.endpoint().cloned(), endpoint);
}

#[tokio::test]
async fn iso_capture_time_reaches_create_record_as_epoch_seconds() {
    let dir = TempDir::new().unwrap();
    let photo = write_photo(&dir, "pano.png", 4096, 2048);

    let gateway = StubGateway::happy();
    let mut session = UploadSession::new(gateway.clone(), credentials()).unwrap();
    session.configure().await.unwrap();
    session.set_photo(&photo).unwrap();
    session
        .set_metadata(&MetadataFields::new("10.5", "20.25", "2001-09-09T01:46:40Z"))
        .unwrap();

    session.execute().await.unwrap();

    let pose = gateway.recorded_pose.lock().unwrap().unwrap();
    assert_eq!(pose.captured_at, 1_000_000_000);
}

#[tokio::test]
async fn undersized_photo_is_rejected_by_setter() {
    let dir = TempDir::new().unwrap();
    let photo = write_photo(&dir, "small.png", 1024, 768);

    let gateway = StubGateway::happy();
    let mut session = UploadSession::new(gateway.clone(), credentials()).unwrap();
    session.configure().await.unwrap();

    let result = session.set_photo(&photo);
    assert!(matches!(
        result,
        Err(PublishError::Photo(PhotoError::TooSmall { .. }))
    ));
    assert!(session.photo().is_none());
}

#[tokio::test]
async fn invalid_latitude_is_rejected_by_setter() {
    let gateway = StubGateway::happy();
    let mut session = UploadSession::new(gateway.clone(), credentials()).unwrap();
    session.configure().await.unwrap();

    let result = session.set_metadata(&MetadataFields::new("91", "0", "0"));
    assert!(matches!(
        result,
        Err(PublishError::Metadata(
            MetadataError::CoordinateOutOfRange { .. }
        ))
    ));
    assert!(session.metadata().is_none());
}

#[tokio::test]
async fn transport_failure_during_bytes_upload_closes_session() {
    let dir = TempDir::new().unwrap();
    let photo = write_photo(&dir, "pano.png", 4096, 2048);

    let gateway = StubGateway::with_failing_upload();
    let mut session = UploadSession::new(gateway.clone(), credentials()).unwrap();
    session.configure().await.unwrap();
    session.set_photo(&photo).unwrap();
    session
        .set_metadata(&MetadataFields::new("0", "0", "0"))
        .unwrap();

    let result = session.execute().await;
    assert!(matches!(result, Err(PublishError::Transport(_))));
    assert_eq!(session.state(), SessionState::Failed);
    assert_eq!(gateway.create_record_calls.load(Ordering::SeqCst), 0);
}
