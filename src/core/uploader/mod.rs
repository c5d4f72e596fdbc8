//! Batch upload
//!
//! Partitions input rows into fixed-size chunks, builds a profile batch and a
//! token batch per chunk, uploads them in that order and paces between chunks.

mod batch_uploader;
mod pacing;
mod types;


pub use batch_uploader::BatchUploader;
pub use pacing::{
    ModuloPacing, NoPacing, RateLimitedPacing, WaitStrategy, wait_strategy_from_config,
};
pub use types::{ChunkReport, RetryPolicy, RunSummary};
