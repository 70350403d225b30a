use crate::storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error! Status: {0}")]
    Status(u16),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid joke response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// A remote provider of single jokes.
///
/// Each call is one request; retrying on duplicates is the caller's job.
pub trait JokeSource {
    fn fetch_joke(&mut self) -> Result<String, FetchError>;
}
