//! Error handling for the uploader
//!
//! This module defines all error types used throughout the crate.

use crate::core::identifier::Platform;
use thiserror::Error;

/// Result type alias for the uploader
pub type Result<T> = std::result::Result<T, UploaderError>;

/// Main error type for the uploader
#[derive(Error, Debug)]
pub enum UploaderError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Neither a device id nor a user id was present when deriving a ctid
    #[error("To get ctid, either device id or user id must exist for {platform}")]
    MissingIdentifier { platform: Platform },

    /// A required column is absent from the CSV header or record
    #[error("Missing column: '{column}'")]
    MissingColumn { column: String },

    /// CSV reader errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

impl UploaderError {
    /// Stable machine-readable code for the error kind
    pub fn error_code(&self) -> &'static str {
        match self {
            UploaderError::Config(_) => "CONFIG_ERROR",
            UploaderError::MissingIdentifier { .. } => "MISSING_IDENTIFIER",
            UploaderError::MissingColumn { .. } => "MISSING_COLUMN",
            UploaderError::Csv(_) => "CSV_ERROR",
            UploaderError::HttpClient(_) => "HTTP_CLIENT_ERROR",
            UploaderError::Serialization(_) => "SERIALIZATION_ERROR",
            UploaderError::Yaml(_) => "YAML_ERROR",
            UploaderError::Io(_) => "IO_ERROR",
            UploaderError::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// Whether the error came from the upload transport and may be retried
    pub fn is_transport(&self) -> bool {
        matches!(self, UploaderError::HttpClient(_))
    }
}
