//! In-memory storage implementation.
//!
//! Documents are kept per collection in insertion order behind a single
//! `RwLock`. Used for development, tests, and builds without `RocksDB`.

use std::collections::HashMap;

use parking_lot::RwLock;

use roastery_core::{DocumentId, EntityKind, Fields};

use crate::document::{Document, Filter};
use crate::error::Result;
use crate::Store;

/// Volatile storage backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<EntityKind, Vec<Document>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn find(&self, kind: EntityKind, filter: &Filter, limit: Option<usize>) -> Result<Vec<Document>> {
        let collections = self.collections.read();
        let Some(documents) = collections.get(&kind) else {
            return Ok(Vec::new());
        };

        Ok(documents
            .iter()
            .filter(|doc| filter.matches(&doc.fields))
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    fn insert(&self, kind: EntityKind, fields: Fields) -> Result<DocumentId> {
        let id = DocumentId::generate();
        let mut collections = self.collections.write();
        collections
            .entry(kind)
            .or_default()
            .push(Document::new(id, fields));
        Ok(id)
    }

    fn collections(&self) -> Result<Vec<(EntityKind, usize)>> {
        let collections = self.collections.read();
        Ok(EntityKind::ALL
            .into_iter()
            .map(|kind| (kind, collections.get(&kind).map_or(0, Vec::len)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(slug: &str) -> Fields {
        let mut fields = Fields::new();
        fields.insert("slug".into(), json!(slug));
        fields
    }

    #[test]
    fn find_returns_insertion_order() {
        let store = MemoryStore::new();
        let first = store.insert(EntityKind::BlogPost, body("a")).unwrap();
        let second = store.insert(EntityKind::BlogPost, body("b")).unwrap();

        let docs = store.find(EntityKind::BlogPost, &Filter::all(), None).unwrap();
        let ids: Vec<_> = docs.iter().map(|d| d.id).collect();
        assert_eq!(ids, [first, second]);
    }

    #[test]
    fn find_applies_filter_and_limit() {
        let store = MemoryStore::new();
        for slug in ["a", "b", "a", "a"] {
            store.insert(EntityKind::Product, body(slug)).unwrap();
        }

        let all_a = store
            .find(EntityKind::Product, &Filter::eq("slug", "a"), None)
            .unwrap();
        assert_eq!(all_a.len(), 3);

        let limited = store
            .find(EntityKind::Product, &Filter::eq("slug", "a"), Some(2))
            .unwrap();
        assert_eq!(limited.len(), 2);

        let none = store
            .find(EntityKind::Product, &Filter::eq("slug", "c"), None)
            .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn collections_are_isolated() {
        let store = MemoryStore::new();
        store.insert(EntityKind::Product, body("a")).unwrap();

        assert!(store
            .find(EntityKind::BlogPost, &Filter::all(), None)
            .unwrap()
            .is_empty());

        let counts = store.collections().unwrap();
        assert_eq!(counts.len(), EntityKind::ALL.len());
        assert!(counts.contains(&(EntityKind::Product, 1)));
        assert!(counts.contains(&(EntityKind::BlogPost, 0)));
    }

    #[test]
    fn panic_while_locked_does_not_disable_store() {
        let store = MemoryStore::new();
        store.insert(EntityKind::Order, body("before")).unwrap();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = store.collections.write();
            panic!("writer failed mid-update");
        }));
        assert!(result.is_err());

        store.insert(EntityKind::Order, body("after")).unwrap();
        let docs = store.find(EntityKind::Order, &Filter::all(), None).unwrap();
        assert_eq!(docs.len(), 2);
    }
}
