//! Configuration section validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;
use url::Url;

impl Validate for UploaderConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating uploader configuration");

        self.api.validate()?;
        self.input.validate()?;
        self.batch.validate()?;
        self.logging.validate()?;

        debug!("Uploader configuration validation completed");
        Ok(())
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("API base URL has invalid format: {}", e))?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(format!(
                    "API base URL must use http:// or https:// scheme, got: {}",
                    scheme
                ));
            }
        }

        if url.host_str().is_none() {
            return Err("API base URL must include a host".to_string());
        }

        if self.path.trim().is_empty() {
            return Err("API path cannot be empty".to_string());
        }

        if self.account_id.trim().is_empty() {
            return Err("API account id cannot be empty".to_string());
        }

        if self.passcode.trim().is_empty() {
            return Err("API passcode cannot be empty".to_string());
        }

        if self.timeout_seconds == Some(0) {
            return Err("API timeout must be greater than 0 when set".to_string());
        }

        if self.max_retries > 10 {
            return Err("API max retries should not exceed 10".to_string());
        }

        Ok(())
    }
}

impl Validate for InputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.as_os_str().is_empty() {
            return Err("Input path cannot be empty".to_string());
        }

        if !self.delimiter.is_ascii() {
            return Err(format!(
                "CSV delimiter must be an ASCII character, got: {:?}",
                self.delimiter
            ));
        }

        if !self.quote.is_ascii() {
            return Err(format!(
                "CSV quote must be an ASCII character, got: {:?}",
                self.quote
            ));
        }

        if self.delimiter == self.quote {
            return Err("CSV delimiter and quote must differ".to_string());
        }

        if let Some(blank) = self.columns.required().iter().position(|c| c.is_empty()) {
            return Err(format!("Column name #{} cannot be empty", blank + 1));
        }

        Ok(())
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<(), String> {
        if self.batch_size == 0 {
            return Err("Batch size must be greater than 0".to_string());
        }

        if self.batch_size > 1000 {
            return Err("Batch size should not exceed 1000 records per upload".to_string());
        }

        match self.pacing.strategy {
            PacingStrategy::Modulo => {
                if self.pacing.modulus == 0 {
                    return Err("Pacing modulus must be greater than 0".to_string());
                }
            }
            PacingStrategy::RateLimited => {
                if self.pacing.chunks_per_second == 0 {
                    return Err("Pacing chunks per second must be greater than 0".to_string());
                }
            }
            PacingStrategy::None => {}
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
