//! `RocksDB` storage implementation.
//!
//! This module provides the `RocksStore` implementation of the `Store` trait.

use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use rocksdb::{
    BoundColumnFamily, ColumnFamilyDescriptor, DBWithThreadMode, IteratorMode, MultiThreaded,
    Options,
};
use ulid::Generator;

use roastery_core::{DocumentId, EntityKind, Fields};

use crate::document::{Document, Filter};
use crate::error::{Result, StoreError};
use crate::schema::{all_column_families, document_key};
use crate::Store;

const ESTIMATE_NUM_KEYS: &str = "rocksdb.estimate-num-keys";

/// RocksDB-backed storage implementation.
pub struct RocksStore {
    db: Arc<DBWithThreadMode<MultiThreaded>>,
    ids: Mutex<Generator>,
}

impl RocksStore {
    /// Open or create a `RocksDB` database at the given path.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the database cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_descriptors: Vec<_> = all_column_families()
            .into_iter()
            .map(|name| ColumnFamilyDescriptor::new(name, Options::default()))
            .collect();

        let db = DBWithThreadMode::open_cf_descriptors(&opts, path, cf_descriptors)
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(Self {
            db: Arc::new(db),
            ids: Mutex::new(Generator::new()),
        })
    }

    /// Get a column family handle.
    fn cf(&self, kind: EntityKind) -> Result<Arc<BoundColumnFamily<'_>>> {
        self.db.cf_handle(kind.collection()).ok_or_else(|| {
            StoreError::Database(format!("column family not found: {kind}"))
        })
    }

    /// Next identifier; monotonic even within one millisecond.
    fn next_id(&self) -> Result<DocumentId> {
        self.ids
            .lock()
            .generate()
            .map(DocumentId::from_ulid)
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    /// Serialize a value using CBOR.
    fn serialize<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(value, &mut buf)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize a value from CBOR.
    fn deserialize<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T> {
        ciborium::from_reader(data).map_err(|e| StoreError::Serialization(e.to_string()))
    }
}

impl Store for RocksStore {
    fn find(&self, kind: EntityKind, filter: &Filter, limit: Option<usize>) -> Result<Vec<Document>> {
        let cf = self.cf(kind)?;
        let limit = limit.unwrap_or(usize::MAX);

        let mut documents = Vec::new();
        if limit == 0 {
            return Ok(documents);
        }

        for item in self.db.iterator_cf(&cf, IteratorMode::Start) {
            let (_, value) = item.map_err(|e| StoreError::Database(e.to_string()))?;
            let document: Document = Self::deserialize(&value)?;

            if filter.matches(&document.fields) {
                documents.push(document);
                if documents.len() >= limit {
                    break;
                }
            }
        }

        Ok(documents)
    }

    fn insert(&self, kind: EntityKind, fields: Fields) -> Result<DocumentId> {
        let cf = self.cf(kind)?;
        let id = self.next_id()?;
        let value = Self::serialize(&Document::new(id, fields))?;

        self.db
            .put_cf(&cf, document_key(&id), value)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(id)
    }

    /// Counts come from `rocksdb.estimate-num-keys`, so they are cheap and
    /// may drift from the exact number after compactions.
    fn collections(&self) -> Result<Vec<(EntityKind, usize)>> {
        EntityKind::ALL
            .into_iter()
            .map(|kind| -> Result<(EntityKind, usize)> {
                let cf = self.cf(kind)?;
                let estimate = self
                    .db
                    .property_int_value_cf(&cf, ESTIMATE_NUM_KEYS)
                    .map_err(|e| StoreError::Database(e.to_string()))?
                    .unwrap_or(0);
                Ok((kind, usize::try_from(estimate).unwrap_or(usize::MAX)))
            })
            .collect()
    }
}
