//! Error types for roastery storage.

use roastery_core::{DocumentId, EntityKind, ValidationErrors};

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store is unreachable or was never initialized.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Database operation failed.
    #[error("database error: {0}")]
    Database(String),

    /// Serialization/deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A stored document no longer satisfies its schema.
    #[error("invalid {collection} document {id}: {errors}")]
    InvalidDocument {
        /// Collection the document was read from.
        collection: EntityKind,
        /// The offending document.
        id: DocumentId,
        /// What is wrong with it.
        errors: ValidationErrors,
    },
}
