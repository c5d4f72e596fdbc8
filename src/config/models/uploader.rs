//! Top-level uploader configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Main uploader configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UploaderConfig {
    /// Upload API configuration
    #[serde(default)]
    pub api: ApiConfig,
    /// Input file configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Chunking and pacing configuration
    #[serde(default)]
    pub batch: BatchConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
