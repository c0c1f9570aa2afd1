//! Identifier types for stored documents.
//!
//! Every document receives a [`DocumentId`] from the store when it is
//! inserted. Identifiers are ULIDs, so their byte order follows creation time
//! and a key-ordered backend iterates documents in insertion order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// A storage-assigned document identifier.
///
/// The identifier belongs to the document envelope, never to an entity
/// record, and is only exposed to clients where an endpoint returns it
/// explicitly (the checkout `order_id`).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentId(Ulid);

impl DocumentId {
    /// Create a new `DocumentId` from a ULID.
    #[must_use]
    pub const fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// Generate a new `DocumentId` with the current timestamp.
    #[must_use]
    pub fn generate() -> Self {
        Self(Ulid::new())
    }

    /// Return the bytes of the ULID (16 bytes, big-endian).
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 16] {
        self.0.to_bytes()
    }
}

impl FromStr for DocumentId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ulid = Ulid::from_string(s).map_err(|_| IdError::InvalidUlid)?;
        Ok(Self(ulid))
    }
}

impl fmt::Debug for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DocumentId({})", self.0)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for DocumentId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DocumentId> for String {
    fn from(id: DocumentId) -> Self {
        id.0.to_string()
    }
}

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The input is not a valid ULID.
    #[error("invalid ULID format")]
    InvalidUlid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_id_string_form() {
        let id = DocumentId::generate();
        let text = id.to_string();
        assert_eq!(text.len(), 26);
        assert_eq!(DocumentId::from_str(&text).unwrap(), id);
    }

    #[test]
    fn document_id_serializes_as_string() {
        let id = DocumentId::generate();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::Value::String(id.to_string()));
    }

    #[test]
    fn document_id_rejects_garbage() {
        assert_eq!(
            DocumentId::from_str("not-a-ulid"),
            Err(IdError::InvalidUlid)
        );
    }

    #[test]
    fn document_id_bytes_keep_ordering() {
        let first = DocumentId::from_ulid(Ulid::from_parts(1_000, 7));
        let second = DocumentId::from_ulid(Ulid::from_parts(2_000, 3));
        assert!(first.to_bytes() < second.to_bytes());
    }
}
