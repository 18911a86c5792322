//! History cache - newest-first list of past results, capped in size

use std::sync::Arc;

use mailtriage_domain::constants::{HISTORY_CAPACITY, HISTORY_STORE_KEY};
use mailtriage_domain::{HistoryRecord, Result, TriageError};
use tracing::{debug, warn};

use super::ports::KeyValueStore;

/// Persistent, capacity-bounded history.
///
/// The whole list is stored as one JSON array under a single key. Every
/// operation reads that snapshot, applies its change and writes it back, so
/// the stored value is always a valid array of at most [`HISTORY_CAPACITY`] records.
pub struct HistoryCache {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl HistoryCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store, key: HISTORY_STORE_KEY.to_string() }
    }

    /// Insert at the front, evicting from the tail past capacity.
    ///
    /// Records are not deduplicated by id.
    pub fn add(&self, record: HistoryRecord) -> Result<()> {
        let mut records = self.list();
        let id = record.id.clone();
        records.insert(0, record);
        records.truncate(HISTORY_CAPACITY);
        self.persist(&records)?;
        debug!(analysis_id = %id, entries = records.len(), "History record added");
        Ok(())
    }

    /// Current records, newest first.
    ///
    /// A missing, unreadable or corrupted snapshot yields an empty list.
    pub fn list(&self) -> Vec<HistoryRecord> {
        let bytes = match self.store.read(&self.key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(error = %err, "History store unreadable, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_slice::<Vec<HistoryRecord>>(&bytes) {
            Ok(mut records) => {
                records.truncate(HISTORY_CAPACITY);
                records
            }
            Err(err) => {
                warn!(error = %err, "History snapshot is corrupted, treating as empty");
                Vec::new()
            }
        }
    }

    /// Remove the first record with `id`; absent ids are a no-op.
    ///
    /// Returns whether a record was removed.
    pub fn remove_by_id(&self, id: &str) -> Result<bool> {
        let mut records = self.list();
        let Some(pos) = records.iter().position(|r| r.id == id) else {
            return Ok(false);
        };
        records.remove(pos);
        self.persist(&records)?;
        Ok(true)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(&self.key)
    }

    fn persist(&self, records: &[HistoryRecord]) -> Result<()> {
        let bytes = serde_json::to_vec(records)
            .map_err(|e| TriageError::Internal(format!("history serialization failed: {e}")))?;
        self.store.write(&self.key, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use mailtriage_domain::Category;

    use super::*;

    #[derive(Default)]
    struct MapStore(Mutex<HashMap<String, Vec<u8>>>);

    impl KeyValueStore for MapStore {
        fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
            Ok(self.0.lock().unwrap().get(key).cloned())
        }

        fn write(&self, key: &str, value: &[u8]) -> Result<()> {
            self.0.lock().unwrap().insert(key.to_string(), value.to_vec());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.0.lock().unwrap().remove(key);
            Ok(())
        }
    }

    fn record(id: &str) -> HistoryRecord {
        HistoryRecord {
            id: id.to_string(),
            category: Category::Productive,
            confidence: 0.5,
            summary: format!("summary {id}"),
            timestamp: "2025-01-01T00:00:00".to_string(),
        }
    }

    fn ids(cache: &HistoryCache) -> Vec<String> {
        cache.list().into_iter().map(|r| r.id).collect()
    }

    #[test]
    fn add_prepends() {
        let cache = HistoryCache::new(Arc::new(MapStore::default()));
        cache.add(record("1")).unwrap();
        cache.add(record("2")).unwrap();
        cache.add(record("3")).unwrap();

        assert_eq!(ids(&cache), ["3", "2", "1"]);
    }

    #[test]
    fn duplicate_ids_are_kept() {
        let cache = HistoryCache::new(Arc::new(MapStore::default()));
        cache.add(record("same")).unwrap();
        cache.add(record("same")).unwrap();

        assert_eq!(cache.list().len(), 2);
        assert!(cache.remove_by_id("same").unwrap());
        assert_eq!(ids(&cache), ["same"]);
    }

    #[test]
    fn oversized_snapshot_is_truncated_on_read() {
        let store = Arc::new(MapStore::default());
        let many: Vec<HistoryRecord> = (0..15).map(|i| record(&i.to_string())).collect();
        store.write(HISTORY_STORE_KEY, &serde_json::to_vec(&many).unwrap()).unwrap();

        let cache = HistoryCache::new(store);

        assert_eq!(cache.list().len(), HISTORY_CAPACITY);
        assert_eq!(cache.list()[0].id, "0");
    }

    #[test]
    fn clear_removes_the_key() {
        let store = Arc::new(MapStore::default());
        let cache = HistoryCache::new(store.clone());
        cache.add(record("1")).unwrap();

        cache.clear().unwrap();

        assert!(store.read(HISTORY_STORE_KEY).unwrap().is_none());
        assert!(cache.list().is_empty());
    }
}
