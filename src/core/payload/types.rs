//! Upload document types
//!
//! Field names follow the upload API's wire format, hence the renames.

use crate::core::identifier::TokenType;
use serde::{Deserialize, Serialize};

/// Value of `Historical_data` on every profile
pub const HISTORICAL_DATA_YES: &str = "Yes";

/// Document discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Profile,
    Token,
}

/// User attribute document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDocument {
    #[serde(rename = "objectId")]
    pub object_id: String,
    /// Epoch seconds
    pub ts: i64,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    #[serde(rename = "profileData")]
    pub profile_data: ProfileData,
}

/// Profile attributes; absent source values are omitted, never null
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileData {
    #[serde(rename = "Historical_data")]
    pub historical_data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "MSG-email", skip_serializing_if = "Option::is_none")]
    pub msg_email: Option<bool>,
    #[serde(rename = "MSG-push", skip_serializing_if = "Option::is_none")]
    pub msg_push: Option<bool>,
}

/// Device push token document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDocument {
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    #[serde(rename = "objectId")]
    pub object_id: String,
    #[serde(rename = "tokenData")]
    pub token_data: TokenData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenData {
    pub id: String,
    #[serde(rename = "type")]
    pub token_type: TokenType,
}

/// Either upload document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Document {
    Profile(ProfileDocument),
    Token(TokenDocument),
}

impl From<ProfileDocument> for Document {
    fn from(doc: ProfileDocument) -> Self {
        Document::Profile(doc)
    }
}

impl From<TokenDocument> for Document {
    fn from(doc: TokenDocument) -> Self {
        Document::Token(doc)
    }
}

impl Document {
    pub fn doc_type(&self) -> DocumentType {
        match self {
            Document::Profile(doc) => doc.doc_type,
            Document::Token(doc) => doc.doc_type,
        }
    }

    pub fn object_id(&self) -> &str {
        match self {
            Document::Profile(doc) => &doc.object_id,
            Document::Token(doc) => &doc.object_id,
        }
    }
}

/// Body of one upload call: `{"d": [...]}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchPayload {
    pub d: Vec<Document>,
}

impl BatchPayload {
    pub fn len(&self) -> usize {
        self.d.len()
    }

    pub fn is_empty(&self) -> bool {
        self.d.is_empty()
    }
}
