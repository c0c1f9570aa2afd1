//! Column family layout for the `RocksDB` backend.
//!
//! Each entity kind gets its own column family named after its collection.
//! Keys are the 16-byte document ULID, values are CBOR-encoded documents.

use roastery_core::{DocumentId, EntityKind};

/// Returns all column family names for database initialization.
#[must_use]
pub fn all_column_families() -> Vec<&'static str> {
    EntityKind::ALL
        .into_iter()
        .map(EntityKind::collection)
        .collect()
}

/// Create a document key from its identifier.
///
/// ULIDs are time-ordered, so iterating a column family visits documents in
/// insertion order.
#[must_use]
pub fn document_key(id: &DocumentId) -> [u8; 16] {
    id.to_bytes()
}
