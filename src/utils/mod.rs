//! Utility modules for the uploader
//!
//! - **error**: Error types and the crate `Result` alias
//! - **logging**: Tracing subscriber initialization

pub mod error;
pub mod logging;

pub use error::{Result, UploaderError};
