//! Upload transport
//!
//! The uploader talks to the ingestion API through [`UploadTransport`] so the
//! chunking loop can be exercised without a network.

mod http;
mod response;

pub use http::{ACCOUNT_ID_HEADER, HttpTransport, PASSCODE_HEADER};
pub use response::{UploadApiResponse, UploadResponse};

use crate::core::payload::BatchPayload;
use crate::utils::error::Result;

/// Sends one batch payload and returns the raw response.
///
/// A response is returned for any HTTP status; only failures to complete the
/// exchange are errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait UploadTransport: Send + Sync {
    async fn upload(&self, payload: &BatchPayload) -> Result<UploadResponse>;
}
