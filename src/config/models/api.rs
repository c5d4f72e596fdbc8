//! Upload API configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upload API endpoint and credentials
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme and host of the upload API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the upload endpoint
    #[serde(default = "default_upload_path")]
    pub path: String,
    /// Project account id, sent as `X-CleverTap-Account-Id`
    #[serde(default)]
    pub account_id: String,
    /// Project passcode, sent as `X-CleverTap-Passcode`
    #[serde(default)]
    pub passcode: String,
    /// Request timeout; the HTTP client default applies when unset
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    /// Extra attempts for an upload call that failed in transport
    #[serde(default)]
    pub max_retries: u32,
    /// Delay between retry attempts
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            path: default_upload_path(),
            account_id: String::new(),
            passcode: String::new(),
            timeout_seconds: None,
            max_retries: 0,
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl ApiConfig {
    /// Full URL of the upload endpoint
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("path", &self.path)
            .field("account_id", &self.account_id)
            .field("passcode", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .field("max_retries", &self.max_retries)
            .field("retry_delay_ms", &self.retry_delay_ms)
            .finish()
    }
}
