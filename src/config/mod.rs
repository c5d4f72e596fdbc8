//! Configuration management for the uploader
//!
//! Configuration is layered: defaults, then an optional YAML file, then
//! environment variables, then command-line flags.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{Result, UploaderError};
use std::path::Path;
use tracing::{debug, info};

/// Environment variable carrying the project account id
pub const ENV_ACCOUNT_ID: &str = "CT_ACCOUNT_ID";
/// Environment variable carrying the project passcode
pub const ENV_PASSCODE: &str = "CT_PASSCODE";
/// Environment variable overriding the API base URL
pub const ENV_API_BASE_URL: &str = "CT_API_BASE_URL";
/// Environment variable overriding the input file
pub const ENV_INPUT_PATH: &str = "CT_INPUT_PATH";
/// Environment variable overriding the batch size
pub const ENV_BATCH_SIZE: &str = "CT_BATCH_SIZE";
/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "CT_LOG_LEVEL";

/// Main configuration struct for the uploader
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Uploader configuration
    pub uploader: UploaderConfig,
}

impl Config {
    /// Load configuration from a YAML file. The result is not validated;
    /// call [`Config::validate`] once every override has been applied.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| UploaderError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let uploader: UploaderConfig = serde_yaml::from_str(content)
            .map_err(|e| UploaderError::Config(format!("Failed to parse config: {}", e)))?;

        debug!("Configuration parsed successfully");
        Ok(Self { uploader })
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides using `lookup` to resolve environment variables
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(account_id) = lookup(ENV_ACCOUNT_ID) {
            self.uploader.api.account_id = account_id;
        }
        if let Some(passcode) = lookup(ENV_PASSCODE) {
            self.uploader.api.passcode = passcode;
        }
        if let Some(base_url) = lookup(ENV_API_BASE_URL) {
            self.uploader.api.base_url = base_url;
        }
        if let Some(path) = lookup(ENV_INPUT_PATH) {
            self.uploader.input.path = path.into();
        }
        if let Some(batch_size) = lookup(ENV_BATCH_SIZE) {
            self.uploader.batch.batch_size = batch_size
                .trim()
                .parse()
                .map_err(|e| UploaderError::Config(format!("Invalid batch size: {}", e)))?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.uploader.logging.level = level;
        }
        Ok(())
    }

    /// Get API configuration
    pub fn api(&self) -> &ApiConfig {
        &self.uploader.api
    }

    /// Get input configuration
    pub fn input(&self) -> &InputConfig {
        &self.uploader.input
    }

    /// Get batch configuration
    pub fn batch(&self) -> &BatchConfig {
        &self.uploader.batch
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.uploader.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.uploader
            .api
            .validate()
            .map_err(|e| UploaderError::Config(format!("API config error: {}", e)))?;

        self.uploader
            .input
            .validate()
            .map_err(|e| UploaderError::Config(format!("Input config error: {}", e)))?;

        self.uploader
            .batch
            .validate()
            .map_err(|e| UploaderError::Config(format!("Batch config error: {}", e)))?;

        self.uploader
            .logging
            .validate()
            .map_err(|e| UploaderError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }
}
