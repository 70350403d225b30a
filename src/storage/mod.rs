//! Synchronous string key/value storage for persisted widget state.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub trait Storage {
    /// Returns the stored value, or `None` if the key was never set.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the value stored under `key`.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
