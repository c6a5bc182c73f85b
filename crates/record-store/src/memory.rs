use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    RecordId, RecordStoreError, Result,
    store::{Record, RecordStore},
};

/// Records keyed by id, plus the order in which the keys were inserted.
struct Table<R> {
    records: HashMap<RecordId, R>,
    order: Vec<RecordId>,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
        }
    }
}

/// In-memory record store.
///
/// All data lives for the lifetime of the process only. Cloning the store
/// yields another handle onto the same table, so one instance can be
/// shared between a service and whatever else needs to inspect it.
pub struct InMemoryRecordStore<R> {
    table: Arc<RwLock<Table<R>>>,
}

impl<R> Clone for InMemoryRecordStore<R> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
        }
    }
}

impl<R> Default for InMemoryRecordStore<R> {
    fn default() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table::default())),
        }
    }
}

impl<R: Record> InMemoryRecordStore<R> {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for InMemoryRecordStore<R> {
    async fn insert(&self, record: R) -> Result<R> {
        let id = record.record_id().clone();
        let mut table = self.table.write().await;

        if table.records.contains_key(&id) {
            return Err(RecordStoreError::AlreadyExists(id));
        }

        table.records.insert(id.clone(), record.clone());
        table.order.push(id);
        Ok(record)
    }

    async fn get(&self, id: &RecordId) -> Result<Option<R>> {
        let table = self.table.read().await;
        Ok(table.records.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<R>> {
        let table = self.table.read().await;
        let records = table
            .order
            .iter()
            .filter_map(|id| table.records.get(id))
            .cloned()
            .collect();
        Ok(records)
    }

    async fn update<F, E>(&self, id: &RecordId, mutate: F) -> std::result::Result<Option<R>, E>
    where
        F: FnOnce(&mut R) -> std::result::Result<(), E> + Send,
        E: From<RecordStoreError> + Send,
    {
        let mut table = self.table.write().await;
        let Some(stored) = table.records.get_mut(id) else {
            return Ok(None);
        };

        // Mutate a copy so a rejected change leaves the stored record intact
        let mut updated = stored.clone();
        mutate(&mut updated)?;
        *stored = updated.clone();

        Ok(Some(updated))
    }

    async fn remove(&self, id: &RecordId) -> Result<Option<R>> {
        let mut table = self.table.write().await;
        let removed = table.records.remove(id);
        if removed.is_some() {
            table.order.retain(|key| key != id);
        }
        Ok(removed)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.table.read().await.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStoreExt;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: RecordId,
        body: String,
    }

    impl Note {
        fn new(id: &str, body: &str) -> Self {
            Self {
                id: RecordId::new(id),
                body: body.to_string(),
            }
        }
    }

    impl Record for Note {
        fn record_id(&self) -> &RecordId {
            &self.id
        }
    }

    #[derive(Debug, PartialEq)]
    enum NoteError {
        Rejected,
        Store,
    }

    impl From<RecordStoreError> for NoteError {
        fn from(_: RecordStoreError) -> Self {
            NoteError::Store
        }
    }

    #[tokio::test]
    async fn insert_and_get() {
        let store: InMemoryRecordStore<Note> = InMemoryRecordStore::new();
        store.insert(Note::new("a", "first")).await.unwrap();

        let found = store.get(&RecordId::new("a")).await.unwrap();
        assert_eq!(found, Some(Note::new("a", "first")));
        assert!(store.get(&RecordId::new("b")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_duplicate_id_fails() {
        let store: InMemoryRecordStore<Note> = InMemoryRecordStore::new();
        store.insert(Note::new("a", "first")).await.unwrap();

        let result = store.insert(Note::new("a", "second")).await;
        assert!(matches!(result, Err(RecordStoreError::AlreadyExists(_))));

        let kept = store.get(&RecordId::new("a")).await.unwrap().unwrap();
        assert_eq!(kept.body, "first");
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store: InMemoryRecordStore<Note> = InMemoryRecordStore::new();
        for id in ["c", "a", "b"] {
            store.insert(Note::new(id, id)).await.unwrap();
        }

        let ids: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.id.to_string())
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn update_applies_mutation() {
        let store: InMemoryRecordStore<Note> = InMemoryRecordStore::new();
        store.insert(Note::new("a", "first")).await.unwrap();

        let updated = store
            .update(&RecordId::new("a"), |note: &mut Note| {
                note.body = "edited".to_string();
                Ok::<_, NoteError>(())
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.body, "edited");

        let stored = store.get(&RecordId::new("a")).await.unwrap().unwrap();
        assert_eq!(stored.body, "edited");
    }

    #[tokio::test]
    async fn update_missing_returns_none() {
        let store: InMemoryRecordStore<Note> = InMemoryRecordStore::new();
        let result = store
            .update(&RecordId::new("missing"), |_| Ok::<_, NoteError>(()))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn rejected_update_leaves_record_untouched() {
        let store: InMemoryRecordStore<Note> = InMemoryRecordStore::new();
        store.insert(Note::new("a", "first")).await.unwrap();

        let result = store
            .update(&RecordId::new("a"), |note: &mut Note| {
                note.body = "half-written".to_string();
                Err(NoteError::Rejected)
            })
            .await;
        assert_eq!(result, Err(NoteError::Rejected));

        let stored = store.get(&RecordId::new("a")).await.unwrap().unwrap();
        assert_eq!(stored.body, "first");
    }

    #[tokio::test]
    async fn remove_deletes_permanently() {
        let store: InMemoryRecordStore<Note> = InMemoryRecordStore::new();
        store.insert(Note::new("a", "first")).await.unwrap();
        store.insert(Note::new("b", "second")).await.unwrap();

        let removed = store.remove(&RecordId::new("a")).await.unwrap();
        assert_eq!(removed, Some(Note::new("a", "first")));
        assert!(store.remove(&RecordId::new("a")).await.unwrap().is_none());

        assert_eq!(store.count().await.unwrap(), 1);
        assert_eq!(store.list().await.unwrap(), vec![Note::new("b", "second")]);
    }

    #[tokio::test]
    async fn reinserting_removed_id_moves_it_to_the_end() {
        let store: InMemoryRecordStore<Note> = InMemoryRecordStore::new();
        store.insert(Note::new("a", "1")).await.unwrap();
        store.insert(Note::new("b", "2")).await.unwrap();
        store.remove(&RecordId::new("a")).await.unwrap();
        store.insert(Note::new("a", "3")).await.unwrap();

        let ids: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.id.to_string())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn clones_share_the_same_table() {
        let store: InMemoryRecordStore<Note> = InMemoryRecordStore::new();
        let handle = store.clone();
        store.insert(Note::new("a", "first")).await.unwrap();

        assert_eq!(handle.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn list_where_filters_in_order() {
        let store: InMemoryRecordStore<Note> = InMemoryRecordStore::new();
        store.insert(Note::new("a", "keep")).await.unwrap();
        store.insert(Note::new("b", "drop")).await.unwrap();
        store.insert(Note::new("c", "keep")).await.unwrap();

        let kept = store.list_where(|n: &Note| n.body == "keep").await.unwrap();
        let ids: Vec<_> = kept.iter().map(|n| n.id.to_string()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn insert_all_counts_inserted_records() {
        let store: InMemoryRecordStore<Note> = InMemoryRecordStore::new();
        let inserted = store
            .insert_all(vec![Note::new("a", "1"), Note::new("b", "2")])
            .await
            .unwrap();
        assert_eq!(inserted, 2);

        let result = store.insert_all(vec![Note::new("c", "3"), Note::new("a", "4")]).await;
        assert!(matches!(result, Err(RecordStoreError::AlreadyExists(_))));
        assert_eq!(store.count().await.unwrap(), 3);
    }
}
