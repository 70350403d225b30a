use super::{Storage, StorageError};
use std::collections::HashMap;

/// In-memory storage. Counts writes so callers can check write-through behavior.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    writes: usize,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let mut items = HashMap::new();
        items.insert(key.to_string(), value.to_string());
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Makes every later `set_item` fail without changing the stored items.
    #[cfg(test)]
    pub(crate) fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(std::io::Error::new(std::io::ErrorKind::Other, "storage is read-only").into());
        }
        self.items.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
