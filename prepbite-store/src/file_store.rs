use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use prepbite_core::{KeyValueStore, StorageError};

/// Slots kept in a single JSON object on disk, `{ "key": "value", ... }`.
///
/// Every `get` reads the document from disk and every `set` re-reads it,
/// replaces one key and writes the whole file back through a temporary
/// sibling and a rename. Another store on the same path only ever loses the
/// slot both of them wrote, never a neighbouring one.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let slots = read_document(&path)?;

        tracing::debug!("Opened {} with {} slot(s)", path.display(), slots.len());
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    fn write_document(&self, slots: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let document = serde_json::to_string_pretty(slots)
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, document)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// A missing or blank file is an empty document.
fn read_document(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let raw = fs::read_to_string(path)?;
    if raw.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    serde_json::from_str(&raw)
        .map_err(|e| StorageError::Backend(format!("{} is not a slot document: {}", path.display(), e)))
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut slots = read_document(&self.path)?;
        Ok(slots.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StorageError::Backend("file store lock poisoned".to_string()))?;

        let mut slots = read_document(&self.path)?;
        slots.insert(key.to_string(), value.to_string());
        self.write_document(&slots)
    }
}
