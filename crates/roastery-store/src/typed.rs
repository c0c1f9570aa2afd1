//! Schema-aware access on top of any [`Store`].
//!
//! Writes persist the normalized body from `Schema::to_fields`. Reads run
//! every stored body back through `Schema::from_fields`, so defaults apply to
//! older documents and the storage identifier never reaches the typed record.

use roastery_core::{DocumentId, Schema};

use crate::document::{Document, Filter};
use crate::error::{Result, StoreError};
use crate::Store;

/// Typed find and insert, available on every store.
pub trait TypedStore {
    /// All records of `T` matching `filter`, at most `limit`.
    ///
    /// # Errors
    ///
    /// Returns the store error, or `StoreError::InvalidDocument` if a stored
    /// body fails validation.
    fn find_all<T: Schema>(&self, filter: &Filter, limit: Option<usize>) -> Result<Vec<T>>;

    /// The first record of `T` matching `filter`.
    ///
    /// # Errors
    ///
    /// Same as [`TypedStore::find_all`].
    fn find_one<T: Schema>(&self, filter: &Filter) -> Result<Option<T>> {
        Ok(self.find_all(filter, Some(1))?.into_iter().next())
    }

    /// Persist a validated record in its collection.
    ///
    /// # Errors
    ///
    /// Returns the store error.
    fn insert_record<T: Schema>(&self, record: &T) -> Result<DocumentId>;
}

impl<S: Store + ?Sized> TypedStore for S {
    fn find_all<T: Schema>(&self, filter: &Filter, limit: Option<usize>) -> Result<Vec<T>> {
        self.find(T::KIND, filter, limit)?
            .iter()
            .map(decode::<T>)
            .collect()
    }

    fn insert_record<T: Schema>(&self, record: &T) -> Result<DocumentId> {
        let id = self.insert(T::KIND, record.to_fields())?;
        tracing::debug!(collection = %T::KIND, id = %id, "Document inserted");
        Ok(id)
    }
}

fn decode<T: Schema>(document: &Document) -> Result<T> {
    T::from_fields(&document.fields).map_err(|errors| {
        tracing::warn!(
            collection = %T::KIND,
            id = %document.id,
            error = %errors,
            "Stored document failed validation"
        );
        StoreError::InvalidDocument {
            collection: T::KIND,
            id: document.id,
            errors,
        }
    })
}
