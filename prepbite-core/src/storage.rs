use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::CoreResult;

/// Durable string slots addressed by a fixed key.
///
/// Reads and writes are synchronous and complete before returning. A `set`
/// replaces the whole slot; there are no partial writes.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage quota exceeded writing {key}: {needed} bytes needed, quota is {quota}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Result of reading a JSON slot.
///
/// `Empty` means the slot was never written (or holds an empty string),
/// `Corrupt` means it holds something that does not decode.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<T> {
    Loaded(T),
    Empty,
    Corrupt(String),
}

impl<T> Slot<T> {
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Slot::Corrupt(_))
    }

    /// Collapse to a value, using `T::default()` for empty and corrupt slots.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Slot::Loaded(value) => value,
            Slot::Empty | Slot::Corrupt(_) => T::default(),
        }
    }

    /// Same shape without the payload, handy for recording how state was restored.
    pub fn status(&self) -> Slot<()> {
        match self {
            Slot::Loaded(_) => Slot::Loaded(()),
            Slot::Empty => Slot::Empty,
            Slot::Corrupt(reason) => Slot::Corrupt(reason.clone()),
        }
    }
}

/// Read and decode a JSON slot. Only backend failures are errors.
pub fn read_slot<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Slot<T>, StorageError> {
    let raw = match store.get(key)? {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(Slot::Empty),
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Slot::Loaded(value)),
        Err(e) => {
            tracing::warn!("Slot {} holds malformed data: {}", key, e);
            Ok(Slot::Corrupt(e.to_string()))
        }
    }
}

/// Encode `value` as JSON and overwrite the slot with it.
pub fn write_slot<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> CoreResult<()> {
    let payload = serde_json::to_string(value)?;
    store.set(key, &payload)?;
    Ok(())
}
