use redis::Commands;
use tracing::info;

use prepbite_core::{KeyValueStore, StorageError};

fn backend_error(e: redis::RedisError) -> StorageError {
    StorageError::Backend(e.to_string())
}

/// Slots stored as plain Redis string keys, optionally under a prefix.
#[derive(Clone)]
pub struct RedisStore {
    client: redis::Client,
    prefix: Option<String>,
}

impl RedisStore {
    pub fn new(connection_string: &str) -> Result<Self, StorageError> {
        let client = redis::Client::open(connection_string).map_err(backend_error)?;
        Ok(Self { client, prefix: None })
    }

    /// Keep this store's slots apart from other users of the same server.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    fn slot_key(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}:{}", prefix, key),
            None => key.to_string(),
        }
    }
}

impl KeyValueStore for RedisStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut conn = self.client.get_connection().map_err(backend_error)?;
        let value: Option<String> = conn.get(self.slot_key(key)).map_err(backend_error)?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut conn = self.client.get_connection().map_err(backend_error)?;
        let key = self.slot_key(key);
        conn.set::<_, _, ()>(&key, value).map_err(backend_error)?;
        info!("Slot written: {} ({} bytes)", key, value.len());
        Ok(())
    }
}
