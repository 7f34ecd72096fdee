//! Configuration module
//!
//! Provides the credential pair required by the publishing API and the
//! client configuration (credentials plus base URL). Credentials are
//! validated wholesale and immutable once accepted.

use std::env;

use crate::error::{ConfigError, PublishError};

/// Default provider base URL. Override with PANOPUB_API_URL.
pub const DEFAULT_BASE_URL: &str = "https://streetviewpublish.googleapis.com/v1";

/// API credential pair: developer key plus OAuth access token.
#[derive(Clone, Debug)]
pub struct Credentials {
    api_key: String,
    access_token: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            access_token: access_token.into(),
        }
    }

    /// Create credentials from environment: PANOPUB_API_KEY (or API_KEY)
    /// and PANOPUB_ACCESS_TOKEN (or ACCESS_TOKEN).
    pub fn from_env() -> Result<Self, PublishError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("PANOPUB_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .map_err(|_| ConfigError::MissingApiKey)?;

        let access_token = env::var("PANOPUB_ACCESS_TOKEN")
            .or_else(|_| env::var("ACCESS_TOKEN"))
            .map_err(|_| ConfigError::MissingAccessToken)?;

        let creds = Self::new(api_key, access_token);
        creds.validate()?;
        Ok(creds)
    }

    pub fn validate(&self) -> Result<(), PublishError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey.into());
        }
        if self.access_token.trim().is_empty() {
            return Err(ConfigError::MissingAccessToken.into());
        }
        Ok(())
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

/// Client configuration: credentials plus the provider base URL.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    credentials: Credentials,
    base_url: String,
}

impl ClientConfig {
    pub fn new(credentials: Credentials, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            credentials,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create configuration from environment. The base URL falls back to
    /// [`DEFAULT_BASE_URL`] when PANOPUB_API_URL is unset.
    pub fn from_env() -> Result<Self, PublishError> {
        let credentials = Credentials::from_env()?;
        let base_url =
            env::var("PANOPUB_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(credentials, base_url))
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
