use std::collections::HashMap;

use super::{KeyValueStore, StorageError, validate_key};

/// In-memory key-value store.
///
/// An optional capacity, in bytes of keys plus values, emulates the quota of
/// browser local storage: a write that would exceed it fails and leaves the
/// previous value in place.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    capacity: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: Some(capacity),
        }
    }

    /// Bytes currently used by keys and values.
    pub fn used(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        if let Some(capacity) = self.capacity {
            let replaced = self.entries.get(key).map_or(0, |old| key.len() + old.len());
            let needed = self.used() - replaced + key.len() + value.len();
            if needed > capacity {
                return Err(StorageError::QuotaExceeded { needed, capacity });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
