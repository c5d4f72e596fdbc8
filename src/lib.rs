//! # ct-uploader
//!
//! Uploads a CSV export of user/device records to the CleverTap upload API.
//!
//! Each data row gets a canonical ctid derived from its device id (or user
//! id), becomes a profile document and a push token document, and is sent in
//! fixed-size chunks: one profile batch and one token batch per chunk.
//!
//! ```rust,no_run
//! use ct_uploader::{BatchUploader, Config, CsvSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::from_file("config/uploader.yaml").await?;
//!     config.apply_env()?;
//!     config.validate()?;
//!
//!     let source = CsvSource::open(config.input())?;
//!     let uploader = BatchUploader::from_config(&config.uploader)?;
//!     let summary = uploader.run(source).await?;
//!     println!("uploaded {} rows in {} chunks", summary.rows, summary.chunks.len());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use crate::core::identifier::{Platform, TokenType, derive};
pub use crate::core::payload::{
    BatchPayload, Document, ProfileDocument, TokenDocument, build_batch_payload, build_profile,
    build_token,
};
pub use crate::core::record::{NormalizedRecord, RawRecord, SourceRecord};
pub use crate::core::source::CsvSource;
pub use crate::core::transport::{
    HttpTransport, UploadApiResponse, UploadResponse, UploadTransport,
};
pub use crate::core::uploader::{BatchUploader, ChunkReport, RunSummary, WaitStrategy};
pub use utils::error::{Result, UploaderError};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            git_hash: env!("GIT_HASH"),
        }
    }
}

pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
