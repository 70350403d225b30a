use super::{Storage, StorageError};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Storage backed by a single JSON object file.
///
/// Every key lives in the same file and every `set_item` rewrites it, so the
/// file always reflects the last completed write.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/joke-machine/storage.json`, or the working directory when
    /// the platform has no data dir.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("joke-machine")
            .join("storage.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_items()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = match self.read_items() {
            Ok(items) => items,
            Err(StorageError::Json(e)) => {
                log::warn!("Discarding unreadable storage file {}: {}", self.path.display(), e);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        items.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&items)?;
        std::fs::write(&self.path, contents)?;
        log::debug!("Wrote {} bytes to {}", value.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("storage.json"));
        assert_eq!(storage.get_item("dadJokes").unwrap(), None);
    }

    #[test]
    fn test_set_item_creates_parent_dirs_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let mut storage = FileStorage::new(&path);
        storage.set_item("dadJokes", "[\"Joke1\"]").unwrap();
        assert!(path.exists());

        let reopened = FileStorage::new(&path);
        assert_eq!(
            reopened.get_item("dadJokes").unwrap().as_deref(),
            Some("[\"Joke1\"]")
        );
    }

    #[test]
    fn test_set_item_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("storage.json"));

        storage.set_item("theme", "dark").unwrap();
        storage.set_item("dadJokes", "[]").unwrap();
        storage.set_item("dadJokes", "[\"Joke1\"]").unwrap();

        assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(
            storage.get_item("dadJokes").unwrap().as_deref(),
            Some("[\"Joke1\"]")
        );
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json").unwrap();

        let mut storage = FileStorage::new(&path);
        assert!(matches!(storage.get_item("dadJokes"), Err(StorageError::Json(_))));

        // A write replaces the unreadable file
        storage.set_item("dadJokes", "[\"Joke1\"]").unwrap();
        assert_eq!(
            storage.get_item("dadJokes").unwrap().as_deref(),
            Some("[\"Joke1\"]")
        );
    }
}
