//! CleverTap identifier derivation
//!
//! Advertising identifiers arrive dashed and mixed-case; the upload API wants
//! them dash-free, lower-cased and namespaced per platform.

use crate::utils::error::{Result, UploaderError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix applied to ctids derived for Android devices
pub const ANDROID_PREFIX: &str = "__g";
/// Prefix applied to ctids derived for iOS devices
pub const IOS_PREFIX: &str = "-g";

/// Device OS value the export uses for Android rows
pub const ANDROID_DEVICE_OS: &str = "Android OS";

/// Device platform of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    /// Classify a `Device OS` column value.
    ///
    /// Only the exact values `"Android OS"` and `"android"` are Android; every
    /// other value, including case or whitespace variants, is treated as iOS.
    pub fn from_device_os(value: &str) -> Self {
        if value == ANDROID_DEVICE_OS || value == "android" {
            Platform::Android
        } else {
            Platform::Ios
        }
    }

    /// ctid prefix for this platform
    pub fn prefix(&self) -> &'static str {
        match self {
            Platform::Android => ANDROID_PREFIX,
            Platform::Ios => IOS_PREFIX,
        }
    }

    /// Push token type the platform's tokens are registered under
    pub fn token_type(&self) -> TokenType {
        match self {
            Platform::Android => TokenType::Fcm,
            Platform::Ios => TokenType::Apns,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Android => write!(f, "android"),
            Platform::Ios => write!(f, "ios"),
        }
    }
}

/// Push token provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Firebase Cloud Messaging
    Fcm,
    /// Apple Push Notification service
    Apns,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Fcm => write!(f, "fcm"),
            TokenType::Apns => write!(f, "apns"),
        }
    }
}

/// Derive a ctid from the device id, falling back to the user id.
///
/// The transform is applied unconditionally, so an already-prefixed value is
/// prefixed again.
pub fn derive(platform: Platform, device_id: &str, user_id: &str) -> Result<String> {
    let source = if !device_id.is_empty() {
        device_id
    } else if !user_id.is_empty() {
        user_id
    } else {
        return Err(UploaderError::MissingIdentifier { platform });
    };

    Ok(ctid_from_hash_string(source, platform.prefix()))
}

fn ctid_from_hash_string(hashed: &str, prefix: &str) -> String {
    let trimmed: String = hashed.chars().filter(|c| *c != '-').collect();
    format!("{}{}", prefix, trimmed.to_lowercase())
}
