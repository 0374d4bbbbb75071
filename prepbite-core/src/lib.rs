pub mod storage;
pub mod notification;

pub use notification::{LogNotifier, NotificationSink};
pub use storage::{KeyValueStore, Slot, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Storage failure: {0}")]
    Storage(#[from] StorageError),
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
