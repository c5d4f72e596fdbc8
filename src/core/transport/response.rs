//! Upload API responses

use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// Raw response of one upload call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl UploadResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_http_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as the upload API's JSON response
    pub fn parse(&self) -> Result<UploadApiResponse> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Structured upload API response.
///
/// Unknown fields are ignored so newer API versions keep parsing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UploadApiResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub processed: Option<u64>,
    #[serde(default)]
    pub unprocessed: Vec<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub code: Option<i64>,
}

impl UploadApiResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success" && self.unprocessed.is_empty()
    }
}
