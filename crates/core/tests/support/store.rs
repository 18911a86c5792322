//! In-memory `KeyValueStore` with failure injection

use std::collections::HashMap;

use mailtriage_core::KeyValueStore;
use mailtriage_domain::{Result as DomainResult, TriageError};
use parking_lot::Mutex;

/// Keeps values in a map. Writes can be made to fail to exercise the
/// "history write failed" paths.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, Vec<u8>>>,
    fail_writes: Mutex<bool>,
    writes: Mutex<usize>,
}

impl MemoryStore {
    /// Store seeded with raw bytes under `key`.
    pub fn with_raw(key: &str, bytes: &[u8]) -> Self {
        let store = Self::default();
        store.values.lock().insert(key.to_string(), bytes.to_vec());
        store
    }

    pub fn fail_writes(&self, fail: bool) {
        *self.fail_writes.lock() = fail;
    }

    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.values.lock().get(key).cloned()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> DomainResult<Option<Vec<u8>>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &[u8]) -> DomainResult<()> {
        if *self.fail_writes.lock() {
            return Err(TriageError::Storage("disk full".to_string()));
        }
        *self.writes.lock() += 1;
        self.values.lock().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        self.values.lock().remove(key);
        Ok(())
    }
}
