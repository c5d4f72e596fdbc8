//! Chunking and pacing configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Chunk size and pacing between chunks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Maximum records per upload chunk
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Pacing applied after each full chunk
    #[serde(default)]
    pub pacing: PacingConfig,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            pacing: PacingConfig::default(),
        }
    }
}

/// Pacing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Pacing strategy
    #[serde(default)]
    pub strategy: PacingStrategy,
    /// Pause for one interval when the row index is a multiple of this
    #[serde(default = "default_pacing_modulus")]
    pub modulus: u64,
    /// Length of one pause
    #[serde(default = "default_pacing_interval_ms")]
    pub interval_ms: u64,
    /// Sustained chunk rate for the rate-limited strategy
    #[serde(default = "default_chunks_per_second")]
    pub chunks_per_second: u32,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            strategy: PacingStrategy::default(),
            modulus: default_pacing_modulus(),
            interval_ms: default_pacing_interval_ms(),
            chunks_per_second: default_chunks_per_second(),
        }
    }
}

/// Pacing strategy
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PacingStrategy {
    /// Sleep when the input row index hits the modulus
    #[default]
    Modulo,
    /// Token bucket over chunks
    RateLimited,
    /// Never pause
    None,
}

impl std::str::FromStr for PacingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "modulo" => Ok(PacingStrategy::Modulo),
            "rate_limited" | "rate-limited" => Ok(PacingStrategy::RateLimited),
            "none" => Ok(PacingStrategy::None),
            other => Err(format!("Unknown pacing strategy: {}", other)),
        }
    }
}
