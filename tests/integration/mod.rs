//! Integration tests for ct-uploader
//!
//! These tests drive the public API across module boundaries.

pub mod config_loading_tests;
pub mod http_transport_tests;
pub mod pipeline_tests;
