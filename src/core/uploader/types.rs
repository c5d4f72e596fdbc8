//! Uploader run reporting types

use crate::core::transport::UploadResponse;

/// Outcome of one flushed chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkReport {
    /// Zero-based chunk position in the run
    pub index: usize,
    /// Records in the chunk
    pub size: usize,
    /// Response to the profile upload
    pub profile: UploadResponse,
    /// Response to the token upload
    pub token: UploadResponse,
}

/// Outcome of a full run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Data rows consumed
    pub rows: usize,
    /// Flushed chunks in order
    pub chunks: Vec<ChunkReport>,
    /// Pauses taken by the wait strategy
    pub pacing_waits: usize,
}

impl RunSummary {
    /// Upload calls issued, two per chunk
    pub fn upload_calls(&self) -> usize {
        self.chunks.len() * 2
    }

    /// Chunk sizes in order
    pub fn chunk_sizes(&self) -> Vec<usize> {
        self.chunks.iter().map(|c| c.size).collect()
    }

    /// Responses whose HTTP status was outside 2xx
    pub fn http_failures(&self) -> usize {
        self.chunks
            .iter()
            .flat_map(|c| [&c.profile, &c.token])
            .filter(|r| !r.is_http_success())
            .count()
    }
}

/// Retry policy for upload calls that fail in transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: std::time::Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 0,
            delay: std::time::Duration::from_secs(1),
        }
    }
}
