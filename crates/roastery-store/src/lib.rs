//! Document storage layer for the roastery catalog service.
//!
//! Every entity kind owns one collection of untyped documents. The [`Store`]
//! trait exposes the two operations the service needs, `find` and `insert`;
//! [`TypedStore`] layers schema validation on top so that only valid records
//! go in and only valid records come out.
//!
//! # Backends
//!
//! - [`MemoryStore`]: process-local, used by tests and development builds.
//! - `RocksStore` (feature `rocksdb-backend`): one column family per
//!   collection, CBOR-encoded documents keyed by ULID.
//!
//! # Example
//!
//! ```
//! use roastery_core::{Product, RoastLevel};
//! use roastery_store::{Filter, MemoryStore, TypedStore};
//!
//! let store = MemoryStore::new();
//! let product = Product::new("Kenya AA", "kenya-aa", "Blackcurrant.", 21.0, RoastLevel::Medium);
//! store.insert_record(&product).unwrap();
//!
//! let found = store.find_one::<Product>(&Filter::eq("slug", "kenya-aa")).unwrap();
//! assert_eq!(found, Some(product));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod document;
pub mod error;
pub mod memory;
#[cfg(feature = "rocksdb-backend")]
pub mod rocks;
#[cfg(feature = "rocksdb-backend")]
pub mod schema;
pub mod typed;

pub use document::{Document, Filter};
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
#[cfg(feature = "rocksdb-backend")]
pub use rocks::RocksStore;
pub use typed::TypedStore;

use roastery_core::{DocumentId, EntityKind, Fields};

/// The storage trait defining all database operations.
///
/// Implementations are shared across concurrent requests and handle their
/// own locking. Every call is a single attempt; there are no retries.
pub trait Store: Send + Sync {
    /// Documents of `kind` matching `filter`, in storage order, at most
    /// `limit` of them. No match is an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the store cannot be reached,
    /// or another error if the database operation fails.
    fn find(&self, kind: EntityKind, filter: &Filter, limit: Option<usize>) -> Result<Vec<Document>>;

    /// Store one document body and return its new identifier.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the store cannot be reached,
    /// or another error if the database operation fails.
    fn insert(&self, kind: EntityKind, fields: Fields) -> Result<DocumentId>;

    /// Number of documents in every collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn collections(&self) -> Result<Vec<(EntityKind, usize)>>;
}
