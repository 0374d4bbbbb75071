pub mod app_config;
pub mod memory;
pub mod file_store;
#[cfg(feature = "redis")]
pub mod redis_repo;

use std::path::PathBuf;
use std::sync::Arc;

use prepbite_core::{KeyValueStore, StorageError};

use app_config::{StorageBackend, StorageConfig};

pub use file_store::FileStore;
pub use memory::MemoryStore;
#[cfg(feature = "redis")]
pub use redis_repo::RedisStore;

const DEFAULT_FILE_PATH: &str = "prepbite-storage.json";
#[cfg(feature = "redis")]
const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1/";

/// Build the storage backend selected in `config`.
pub fn open_store(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>, StorageError> {
    match config.backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage");
            let store = match config.quota_bytes {
                Some(quota) => MemoryStore::with_quota(quota),
                None => MemoryStore::new(),
            };
            Ok(Arc::new(store))
        }
        StorageBackend::File => {
            let path = config
                .path
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_PATH));
            tracing::info!("Using file storage at {}", path.display());
            Ok(Arc::new(FileStore::open(path)?))
        }
        #[cfg(feature = "redis")]
        StorageBackend::Redis => {
            let url = config.redis_url.as_deref().unwrap_or(DEFAULT_REDIS_URL);
            tracing::info!("Using redis storage at {}", url);
            Ok(Arc::new(RedisStore::new(url)?))
        }
        #[cfg(not(feature = "redis"))]
        StorageBackend::Redis => Err(StorageError::Backend(
            "redis storage requested but this build lacks the `redis` feature".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_memory_store_with_quota() {
        let config = StorageConfig {
            quota_bytes: Some(8),
            ..StorageConfig::default()
        };
        let store = open_store(&config).unwrap();
        assert!(store.set("k", "1234").is_ok());
        assert!(matches!(
            store.set("k", "123456789"),
            Err(StorageError::QuotaExceeded { .. })
        ));
    }

    #[test]
    fn test_open_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            backend: StorageBackend::File,
            path: Some(dir.path().join("slots.json")),
            ..StorageConfig::default()
        };

        open_store(&config).unwrap().set("cart", "[]").unwrap();
        let reopened = open_store(&config).unwrap();
        assert_eq!(reopened.get("cart").unwrap().as_deref(), Some("[]"));
    }

    #[cfg(not(feature = "redis"))]
    #[test]
    fn test_redis_backend_needs_feature() {
        let config = StorageConfig {
            backend: StorageBackend::Redis,
            ..StorageConfig::default()
        };
        assert!(matches!(open_store(&config), Err(StorageError::Backend(_))));
    }
}
