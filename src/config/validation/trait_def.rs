//! Validation trait definition

/// Validation trait for configuration sections.
///
/// Returns a human-readable reason on failure; callers wrap it in
/// `UploaderError::Config` with the section name.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
