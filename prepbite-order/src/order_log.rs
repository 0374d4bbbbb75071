use std::sync::Arc;

use prepbite_core::storage::{read_slot, write_slot};
use prepbite_core::{CoreError, KeyValueStore, Slot, StorageError};

use crate::models::OrderRecord;

/// Storage slot holding every order placed from this store
pub const ORDERS_KEY: &str = "prepbiteOrders";

/// Append-only history of placed orders.
pub struct OrderLog {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl OrderLog {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, ORDERS_KEY)
    }

    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn load(&self) -> Result<Slot<Vec<OrderRecord>>, OrderLogError> {
        read_slot(self.store.as_ref(), &self.key).map_err(OrderLogError::Read)
    }

    /// Orders placed so far, oldest first. An unreadable log reads as empty.
    pub fn orders(&self) -> Result<Vec<OrderRecord>, OrderLogError> {
        Ok(self.load()?.unwrap_or_default())
    }

    /// Add `record` to the end of the log and return the new length.
    ///
    /// A log that exists but does not decode is left untouched and the append
    /// is refused.
    pub fn append(&self, record: &OrderRecord) -> Result<usize, OrderLogError> {
        let mut orders = match self.load()? {
            Slot::Loaded(orders) => orders,
            Slot::Empty => Vec::new(),
            Slot::Corrupt(reason) => {
                tracing::error!("Order log {} is unreadable, refusing to overwrite: {}", self.key, reason);
                return Err(OrderLogError::Corrupt(reason));
            }
        };

        orders.push(record.clone());
        write_slot(self.store.as_ref(), &self.key, &orders).map_err(OrderLogError::Write)?;

        tracing::info!(
            "Order recorded for {} ({} item(s), total {})",
            record.customer_name,
            record.item_count(),
            record.total
        );
        Ok(orders.len())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OrderLogError {
    #[error("Failed to read order log: {0}")]
    Read(StorageError),

    #[error("Failed to save order log: {0}")]
    Write(CoreError),

    #[error("Order log is corrupt: {0}")]
    Corrupt(String),
}
