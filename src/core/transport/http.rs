//! HTTPS transport for the upload API

use super::{UploadResponse, UploadTransport};
use crate::config::ApiConfig;
use crate::core::payload::BatchPayload;
use crate::utils::error::{Result, UploaderError};
use std::time::Duration;
use tracing::debug;

/// Header carrying the project account id
pub const ACCOUNT_ID_HEADER: &str = "X-CleverTap-Account-Id";
/// Header carrying the project passcode
pub const PASSCODE_HEADER: &str = "X-CleverTap-Passcode";

/// reqwest-backed upload transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
    account_id: String,
    passcode: String,
}

impl HttpTransport {
    /// Create a transport for the configured endpoint
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("ct-uploader/", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let client = builder
            .build()
            .map_err(|e| UploaderError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
            account_id: config.account_id.clone(),
            passcode: config.passcode.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl UploadTransport for HttpTransport {
    async fn upload(&self, payload: &BatchPayload) -> Result<UploadResponse> {
        debug!("POST {} with {} documents", self.endpoint, payload.len());

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCOUNT_ID_HEADER, &self.account_id)
            .header(PASSCODE_HEADER, &self.passcode)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(UploadResponse { status, body })
    }
}
