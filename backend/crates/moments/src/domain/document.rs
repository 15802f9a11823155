//! Moments Document
//!
//! The stored document is arbitrary JSON. The typed view below describes
//! the conventional shape (`MomentUser[]`) and is only used to summarise a
//! document in logs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Largest accepted write body, in bytes
pub const MAX_DOCUMENT_BYTES: usize = 2 * 1024 * 1024;

/// A whole moments document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MomentsDocument(Value);

impl MomentsDocument {
    /// The state before the first write: an empty list
    pub fn empty() -> Self {
        Self(Value::Array(Vec::new()))
    }

    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parse stored or submitted bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes).map(Self)
    }

    /// Serialize with two-space indentation
    pub fn to_pretty_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec_pretty(&self.0)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// User and moment counts, when the document has the conventional shape
    pub fn summary(&self) -> Option<DocumentSummary> {
        let users: Vec<MomentUser> = serde_json::from_value(self.0.clone()).ok()?;
        Some(DocumentSummary {
            users: users.len(),
            moments: users.iter().map(|u| u.moment_list.len()).sum(),
        })
    }
}

impl Default for MomentsDocument {
    fn default() -> Self {
        Self::empty()
    }
}

/// Counts logged on read and write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentSummary {
    pub users: usize,
    pub moments: usize,
}

/// One author and their moments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentUser {
    pub name: String,
    pub avatar: String,
    #[serde(rename = "avatarLink", default, skip_serializing_if = "Option::is_none")]
    pub avatar_link: Option<String>,
    pub moment_list: Vec<MomentItem>,
}

/// A single moment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentItem {
    pub content: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<MomentLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Link card attached to a moment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentLink {
    pub url: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}
