//! Stored documents and equality filters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use roastery_core::{DocumentId, Fields};

/// One stored record: the validated body plus storage metadata.
///
/// The identifier and timestamp live beside the body, never inside it, so
/// a body handed back to a client carries no storage fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Store-assigned identifier.
    pub id: DocumentId,

    /// When the document was inserted.
    pub created_at: DateTime<Utc>,

    /// The record body.
    pub fields: Fields,
}

impl Document {
    /// Wrap a body with a fresh timestamp.
    #[must_use]
    pub fn new(id: DocumentId, fields: Fields) -> Self {
        Self {
            id,
            created_at: Utc::now(),
            fields,
        }
    }
}

/// Exact-match constraints on document fields.
///
/// An empty filter matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    terms: Fields,
}

impl Filter {
    /// Match every document.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Match documents whose `field` equals `value`.
    #[must_use]
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::all().and_eq(field, value)
    }

    /// Additionally require `field` to equal `value`.
    #[must_use]
    pub fn and_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.terms.insert(field.into(), value.into());
        self
    }

    /// Whether a document body satisfies every term.
    #[must_use]
    pub fn matches(&self, fields: &Fields) -> bool {
        self.terms
            .iter()
            .all(|(field, expected)| fields.get(field) == Some(expected))
    }
}
