//! HTTP gateway
//!
//! reqwest-backed implementation of the remote gateway contract. Wire shapes
//! use `Option` identifier fields so an incomplete provider response is
//! detected and surfaced as a `RemoteResponse` error instead of defaulting.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use panopub_core::{
    ClientConfig, Credentials, PhotoRecord, PoseMetadata, PublishError, UploadEndpoint,
};

use crate::gateway::RemoteGateway;

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Response to the start-upload call.
#[derive(Debug, Deserialize)]
struct StartUploadResponse {
    #[serde(rename = "uploadUrl")]
    upload_url: Option<String>,
}

#[derive(Debug, Serialize)]
struct UploadReference<'a> {
    #[serde(rename = "uploadUrl")]
    upload_url: &'a str,
}

#[derive(Debug, Serialize)]
struct LatLngPair {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Serialize)]
struct PoseBody {
    #[serde(rename = "latLngPair")]
    lat_lng_pair: LatLngPair,
}

#[derive(Debug, Serialize)]
struct CaptureTime {
    seconds: i64,
}

/// Request body for the create-record call. Matches the provider wire shape.
#[derive(Debug, Serialize)]
struct CreatePhotoRequest<'a> {
    #[serde(rename = "uploadReference")]
    upload_reference: UploadReference<'a>,
    pose: PoseBody,
    #[serde(rename = "captureTime")]
    capture_time: CaptureTime,
}

#[derive(Debug, Deserialize)]
struct PhotoIdBody {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CreatePhotoResponse {
    #[serde(rename = "photoId")]
    photo_id: Option<PhotoIdBody>,
}

/// HTTP implementation of the remote gateway.
#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Result<Self, PublishError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|err| PublishError::Transport(format!("Failed to create HTTP client: {}", err)))?;

        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, PublishError> {
        Self::new(config.base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn apply_auth(
        &self,
        request: reqwest::RequestBuilder,
        credentials: &Credentials,
    ) -> reqwest::RequestBuilder {
        request.header(
            "Authorization",
            format!("Bearer {}", credentials.access_token()),
        )
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, PublishError> {
        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PublishError::Transport(format!(
                "API request failed with status {}: {}",
                status, error_text
            )));
        }
        Ok(response)
    }

    fn transport(err: reqwest::Error) -> PublishError {
        PublishError::Transport(format!("Failed to send request: {}", err))
    }
}

#[async_trait]
impl RemoteGateway for HttpGateway {
    async fn start_upload(
        &self,
        credentials: &Credentials,
    ) -> Result<UploadEndpoint, PublishError> {
        let url = format!("{}/photo:startUpload", self.base_url);
        let request = self
            .client
            .post(&url)
            .query(&[("key", credentials.api_key())])
            .header(reqwest::header::CONTENT_LENGTH, 0);
        let request = self.apply_auth(request, credentials);

        let response = request.send().await.map_err(Self::transport)?;
        let response = Self::check_status(response).await?;

        let body: StartUploadResponse = response
            .json()
            .await
            .map_err(|err| PublishError::RemoteResponse(format!("Failed to parse response as JSON: {}", err)))?;

        let upload_url = body
            .upload_url
            .filter(|u| !u.is_empty())
            .ok_or_else(|| {
                PublishError::RemoteResponse("startUpload response missing uploadUrl".to_string())
            })?;

        tracing::debug!(upload_url = %upload_url, "Upload endpoint acquired");
        Ok(UploadEndpoint::new(upload_url))
    }

    async fn upload_bytes(
        &self,
        endpoint: &UploadEndpoint,
        credentials: &Credentials,
        data: Vec<u8>,
    ) -> Result<(), PublishError> {
        let size = data.len();
        let request = self.client.post(endpoint.as_str()).body(data);
        let request = self.apply_auth(request, credentials);

        let response = request.send().await.map_err(Self::transport)?;
        Self::check_status(response).await?;

        tracing::debug!(bytes = size, "Photo bytes uploaded");
        Ok(())
    }

    async fn create_record(
        &self,
        endpoint: &UploadEndpoint,
        credentials: &Credentials,
        pose: &PoseMetadata,
    ) -> Result<PhotoRecord, PublishError> {
        let url = format!("{}/photo", self.base_url);
        let body = CreatePhotoRequest {
            upload_reference: UploadReference {
                upload_url: endpoint.as_str(),
            },
            pose: PoseBody {
                lat_lng_pair: LatLngPair {
                    latitude: pose.latitude,
                    longitude: pose.longitude,
                },
            },
            capture_time: CaptureTime {
                seconds: pose.captured_at,
            },
        };

        let request = self
            .client
            .post(&url)
            .query(&[("key", credentials.api_key())])
            .json(&body);
        let request = self.apply_auth(request, credentials);

        let response = request.send().await.map_err(Self::transport)?;
        let response = Self::check_status(response).await?;

        let body: CreatePhotoResponse = response
            .json()
            .await
            .map_err(|err| PublishError::RemoteResponse(format!("Failed to parse response as JSON: {}", err)))?;

        let photo_id = body
            .photo_id
            .and_then(|p| p.id)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                PublishError::RemoteResponse("create photo response missing photoId".to_string())
            })?;

        Ok(PhotoRecord { photo_id })
    }
}
