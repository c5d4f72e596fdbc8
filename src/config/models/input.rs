//! CSV input configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where and how to read the record export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// CSV file to upload
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
    /// Field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Quote character
    #[serde(default = "default_quote")]
    pub quote: char,
    /// Header names of the columns the uploader reads
    #[serde(default)]
    pub columns: ColumnConfig,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
            delimiter: default_delimiter(),
            quote: default_quote(),
            columns: ColumnConfig::default(),
        }
    }
}

/// Header names of the export columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    pub user_id: String,
    pub device_id: String,
    pub device_os: String,
    pub token: String,
    pub name: String,
    pub email: String,
    pub email_opt_in: String,
    pub push_opt_in: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            user_id: "User Id".to_string(),
            device_id: "Device ID".to_string(),
            device_os: "Device OS".to_string(),
            token: "Token".to_string(),
            name: "Name".to_string(),
            email: "Email Address".to_string(),
            email_opt_in: "Email Opt In?".to_string(),
            push_opt_in: "Push Opt In?".to_string(),
        }
    }
}

impl ColumnConfig {
    /// Every configured column name, in a fixed order
    pub fn required(&self) -> [&str; 8] {
        [
            self.user_id.as_str(),
            self.device_id.as_str(),
            self.device_os.as_str(),
            self.token.as_str(),
            self.name.as_str(),
            self.email.as_str(),
            self.email_opt_in.as_str(),
            self.push_opt_in.as_str(),
        ]
    }
}
