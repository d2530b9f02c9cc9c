//! In-memory [`StorageArea`] implementation.

use std::sync::{PoisonError, RwLock};

use super::StorageArea;

/// Thread-safe in-memory store with insertion-ordered enumeration.
///
/// Re-setting an existing key keeps its enumeration position, so
/// `key(index)` is deterministic across overwrites. Suitable as the
/// session-scoped store of a headless host and for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<Vec<(String, String)>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<(String, String)>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<(String, String)>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StorageArea for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.write();
        if let Some(entry) = entries.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value.to_owned();
        } else {
            entries.push((key.to_owned(), value.to_owned()));
        }
    }

    fn remove(&self, key: &str) {
        self.write().retain(|(k, _)| k != key);
    }

    fn clear(&self) {
        self.write().clear();
    }

    fn key(&self, index: usize) -> Option<String> {
        self.read().get(index).map(|(k, _)| k.clone())
    }

    fn len(&self) -> usize {
        self.read().len()
    }

    fn keys(&self) -> Vec<String> {
        self.read().iter().map(|(k, _)| k.clone()).collect()
    }
}
