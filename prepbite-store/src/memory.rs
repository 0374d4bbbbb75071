use std::collections::HashMap;
use std::sync::RwLock;

use prepbite_core::{KeyValueStore, StorageError};

/// Slots held in process memory. Gone when the process exits.
///
/// An optional quota caps the summed size of all keys and values, the way a
/// browser caps its local storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RwLock<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
            quota: Some(quota_bytes),
        }
    }

    /// Summed size of every key and value, as the quota counts it.
    pub fn used_bytes(&self) -> Result<usize, StorageError> {
        let slots = self.slots.read().map_err(poisoned)?;
        Ok(slots.iter().map(|(k, v)| k.len() + v.len()).sum())
    }
}

fn poisoned<T>(_: T) -> StorageError {
    StorageError::Backend("memory store lock poisoned".to_string())
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.read().map_err(poisoned)?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.write().map_err(poisoned)?;

        if let Some(quota) = self.quota {
            let others: usize = slots
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > quota {
                tracing::warn!("Memory store quota exceeded writing {}: {} > {}", key, needed, quota);
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    quota,
                });
            }
        }

        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
