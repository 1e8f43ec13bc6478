//! News documents served by the detail lookup.

use std::fmt;

/// Search-index `_id` of a news document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId(String);

/// Raised when a document id is blank.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("eid must not be empty")]
pub struct EmptyDocumentId;

impl DocumentId {
    /// Validate and construct a [`DocumentId`]. The value is kept verbatim.
    pub fn new(raw: impl Into<String>) -> Result<Self, EmptyDocumentId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(EmptyDocumentId);
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
