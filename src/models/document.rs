//! Identifiers and metadata common to every stored record.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a stored document: 24 lowercase hexadecimal characters.
///
/// The first eight characters encode the creation time in seconds, the rest
/// are random, so identifiers sort roughly by creation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Length of the textual form.
    pub const LEN: usize = 24;

    /// Generates a fresh identifier.
    pub fn generate() -> Self {
        let seconds = Utc::now().timestamp() as u32;
        let entropy = Uuid::new_v4();
        let tail: String = entropy.as_bytes()[..8]
            .iter()
            .map(|byte| format!("{:02x}", byte))
            .collect();
        Self(format!("{:08x}{}", seconds, tail))
    }

    /// Parses a textual identifier.
    ///
    /// Returns `None` when the value is not 24 hexadecimal characters.
    ///
    /// # Example
    ///
    /// ```
    /// use hr_payroll::models::DocumentId;
    ///
    /// assert!(DocumentId::parse("000000000000000000000000").is_some());
    /// assert!(DocumentId::parse("not-an-id").is_none());
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        if value.len() == Self::LEN && value.bytes().all(|b| b.is_ascii_hexdigit()) {
            Some(Self(value.to_ascii_lowercase()))
        } else {
            None
        }
    }

    /// Returns the textual form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity and timestamps carried by every document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Primary key.
    #[serde(rename = "_id")]
    pub id: DocumentId,
    /// When the document was inserted.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// When the document was last written.
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl DocumentMeta {
    /// Metadata for a document being created now.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: DocumentId::generate(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Bumps the update timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for DocumentMeta {
    fn default() -> Self {
        Self::new()
    }
}

/// A record stored in its own collection.
pub trait Document: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Name of the collection holding this record type.
    const COLLECTION: &'static str;

    /// Human readable record name used in error messages.
    const RESOURCE: &'static str;

    /// Shared metadata.
    fn meta(&self) -> &DocumentMeta;

    /// Mutable access to the shared metadata.
    fn meta_mut(&mut self) -> &mut DocumentMeta;

    /// The document's identifier.
    fn id(&self) -> &DocumentId {
        &self.meta().id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_parseable() {
        let id = DocumentId::generate();
        assert_eq!(id.as_str().len(), DocumentId::LEN);
        assert_eq!(DocumentId::parse(id.as_str()), Some(id));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = DocumentId::generate();
        let b = DocumentId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_parse_normalizes_case() {
        let id = DocumentId::parse("ABCDEF0123456789ABCDEF01").unwrap();
        assert_eq!(id.as_str(), "abcdef0123456789abcdef01");
    }

    #[test]
    fn test_parse_rejects_wrong_length_and_non_hex() {
        assert!(DocumentId::parse("abc").is_none());
        assert!(DocumentId::parse("zzzzzzzzzzzzzzzzzzzzzzzz").is_none());
        assert!(DocumentId::parse("").is_none());
    }

    #[test]
    fn test_meta_serializes_with_mongo_style_names() {
        let meta = DocumentMeta::new();
        let json = serde_json::to_value(&meta).unwrap();
        assert!(json.get("_id").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }
}
