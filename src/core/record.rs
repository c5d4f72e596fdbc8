//! Record types flowing from the CSV export to the payload builder
//!
//! A [`RawRecord`] is the untyped row as read; [`SourceRecord`] is the typed
//! view over the configured columns; [`NormalizedRecord`] adds the derived
//! ctid and token type.

use crate::config::ColumnConfig;
use crate::core::identifier::{self, Platform, TokenType};
use crate::utils::error::{Result, UploaderError};
use std::collections::HashMap;

/// One CSV data row keyed by header name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: HashMap<String, String>,
}

impl RawRecord {
    /// Pair header names with row values positionally
    pub fn from_row<H, V>(header: &[H], values: &[V]) -> Self
    where
        H: AsRef<str>,
        V: AsRef<str>,
    {
        header
            .iter()
            .zip(values.iter())
            .map(|(h, v)| (h.as_ref().to_string(), v.as_ref().to_string()))
            .collect()
    }

    /// Value of `column`, failing when the column is absent
    pub fn get(&self, column: &str) -> Result<&str> {
        self.fields
            .get(column)
            .map(String::as_str)
            .ok_or_else(|| UploaderError::MissingColumn {
                column: column.to_string(),
            })
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no columns
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Typed view of an export row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRecord {
    pub user_id: String,
    pub device_id: String,
    pub device_os: String,
    pub token: String,
    pub name: String,
    pub email: String,
    pub email_opt_in: String,
    pub push_opt_in: String,
}

impl SourceRecord {
    /// Look up every configured column on `raw`
    pub fn from_raw(raw: &RawRecord, columns: &ColumnConfig) -> Result<Self> {
        Ok(Self {
            user_id: raw.get(&columns.user_id)?.to_string(),
            device_id: raw.get(&columns.device_id)?.to_string(),
            device_os: raw.get(&columns.device_os)?.to_string(),
            token: raw.get(&columns.token)?.to_string(),
            name: raw.get(&columns.name)?.to_string(),
            email: raw.get(&columns.email)?.to_string(),
            email_opt_in: raw.get(&columns.email_opt_in)?.to_string(),
            push_opt_in: raw.get(&columns.push_opt_in)?.to_string(),
        })
    }

    pub fn platform(&self) -> Platform {
        Platform::from_device_os(&self.device_os)
    }

    /// Derive the ctid and token type for this record
    pub fn normalize(self) -> Result<NormalizedRecord> {
        let platform = self.platform();
        let ctid = identifier::derive(platform, &self.device_id, &self.user_id)?;
        Ok(NormalizedRecord {
            ctid,
            token_type: platform.token_type(),
            record: self,
        })
    }
}

/// A source record with its derived identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub record: SourceRecord,
    pub ctid: String,
    pub token_type: TokenType,
}
