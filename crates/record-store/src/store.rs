use async_trait::async_trait;

use crate::{RecordId, RecordStoreError, Result};

/// A value that can be kept in a [`RecordStore`].
///
/// The identifier is owned by the record itself and must never change
/// once the record has been inserted.
pub trait Record: Clone + Send + Sync + 'static {
    /// Returns the key this record is stored under.
    fn record_id(&self) -> &RecordId;
}

/// Core trait for record store implementations.
///
/// A record store is a keyed container: insert, lookup, full enumeration,
/// update-in-place and delete. All implementations must be thread-safe
/// (Send + Sync) and must run each mutation to completion before another
/// mutation on the same key can observe the record.
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// Inserts a new record.
    ///
    /// Fails with `AlreadyExists` if the identifier is already taken.
    async fn insert(&self, record: R) -> Result<R>;

    /// Looks up a record by identifier.
    ///
    /// Returns None if the record doesn't exist.
    async fn get(&self, id: &RecordId) -> Result<Option<R>>;

    /// Returns a snapshot of every stored record.
    ///
    /// Records are returned in insertion order.
    async fn list(&self) -> Result<Vec<R>>;

    /// Applies `mutate` to the stored record and returns the updated copy.
    ///
    /// The lookup, the mutation and the write-back happen atomically with
    /// respect to other mutations. If `mutate` returns an error the stored
    /// record is left unchanged and the error is returned. Returns
    /// `Ok(None)` if the record doesn't exist.
    async fn update<F, E>(&self, id: &RecordId, mutate: F) -> std::result::Result<Option<R>, E>
    where
        F: FnOnce(&mut R) -> std::result::Result<(), E> + Send,
        E: From<RecordStoreError> + Send;

    /// Removes a record permanently.
    ///
    /// Returns the removed record, or None if it didn't exist.
    async fn remove(&self, id: &RecordId) -> Result<Option<R>>;

    /// Returns the number of stored records.
    async fn count(&self) -> Result<usize>;
}

/// Extension trait providing convenience methods for record stores.
#[async_trait]
pub trait RecordStoreExt<R: Record>: RecordStore<R> {
    /// Returns every record matching `predicate`, in insertion order.
    async fn list_where<P>(&self, predicate: P) -> Result<Vec<R>>
    where
        P: Fn(&R) -> bool + Send,
    {
        let mut records = self.list().await?;
        records.retain(|r| predicate(r));
        Ok(records)
    }

    /// Inserts every record, stopping at the first failure.
    async fn insert_all(&self, records: Vec<R>) -> Result<usize> {
        let mut inserted = 0;
        for record in records {
            self.insert(record).await?;
            inserted += 1;
        }
        Ok(inserted)
    }
}

// Blanket implementation for all RecordStore implementations
impl<R: Record, T: RecordStore<R> + ?Sized> RecordStoreExt<R> for T {}
