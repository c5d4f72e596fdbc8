//! Configuration data models
//!
//! This module defines all configuration structures used by the uploader.

pub mod api;
pub mod batch;
pub mod input;
pub mod logging;
pub mod uploader;

// Re-export all configuration types
pub use api::*;
pub use batch::*;
pub use input::*;
pub use logging::*;
pub use uploader::*;

/// Default upload API base URL
pub fn default_base_url() -> String {
    "https://api.clevertap.com".to_string()
}

/// Default upload API path
pub fn default_upload_path() -> String {
    "/1/upload".to_string()
}

/// Default number of records per upload chunk
pub fn default_batch_size() -> usize {
    100
}

/// Default pacing modulus over the input row index
pub fn default_pacing_modulus() -> u64 {
    3
}

/// Default pacing interval in milliseconds
pub fn default_pacing_interval_ms() -> u64 {
    1000
}

/// Default chunk rate for the rate-limited pacing strategy
pub fn default_chunks_per_second() -> u32 {
    3
}

/// Default retry delay in milliseconds
pub fn default_retry_delay_ms() -> u64 {
    1000
}

/// Default input file
pub fn default_input_path() -> std::path::PathBuf {
    std::path::PathBuf::from("profiles.csv")
}

/// Default CSV delimiter
pub fn default_delimiter() -> char {
    ','
}

/// Default CSV quote character
pub fn default_quote() -> char {
    '|'
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}
