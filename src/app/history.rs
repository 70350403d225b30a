use crate::net::{FetchError, JokeSource};
use crate::storage::{Storage, StorageError};

/// Storage key holding the JSON array of seen jokes.
pub const STORAGE_KEY: &str = "dadJokes";

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Joke(String),
    /// Every attempt returned a joke that was already in the history.
    Exhausted,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Affordances {
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

/// Ordered, duplicate-free history of fetched jokes, written through to
/// storage on every append.
pub struct HistoryManager<S, J> {
    entries: Vec<String>,
    storage: S,
    source: J,
}

impl<S: Storage, J: JokeSource> HistoryManager<S, J> {
    pub fn new(storage: S, source: J) -> Self {
        let entries = load_entries(&storage);
        log::info!("Loaded {} jokes from storage", entries.len());
        Self {
            entries,
            storage,
            source,
        }
    }

    pub fn fetch_joke_default(&mut self) -> Result<FetchOutcome, FetchError> {
        self.fetch_joke(DEFAULT_MAX_ATTEMPTS)
    }

    /// Fetches a joke not yet in the history, making at most `max_attempts`
    /// requests. Transport failures end the call without retrying.
    pub fn fetch_joke(&mut self, max_attempts: u32) -> Result<FetchOutcome, FetchError> {
        for attempt in 1..=max_attempts {
            let joke = self.source.fetch_joke()?;
            if self.contains(&joke) {
                log::debug!("Attempt {}/{} returned a seen joke", attempt, max_attempts);
                continue;
            }
            self.append(joke.clone())?;
            return Ok(FetchOutcome::Joke(joke));
        }

        log::info!("No new joke after {} attempts", max_attempts);
        Ok(FetchOutcome::Exhausted)
    }

    fn append(&mut self, joke: String) -> Result<(), StorageError> {
        self.entries.push(joke);
        if let Err(e) = self.persist() {
            self.entries.pop();
            return Err(e);
        }
        Ok(())
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.entries)?;
        self.storage.set_item(STORAGE_KEY, &raw)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn source(&self) -> &J {
        &self.source
    }
}

impl<S, J> HistoryManager<S, J> {
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn contains(&self, joke: &str) -> bool {
        self.entries.iter().any(|entry| entry == joke)
    }

    pub fn position_of(&self, joke: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry == joke)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn previous_joke(&self, current: &str) -> Option<&str> {
        match self.position_of(current) {
            Some(i) if i > 0 => self.get(i - 1),
            _ => None,
        }
    }

    pub fn next_joke(&self, current: &str) -> Option<&str> {
        self.position_of(current).and_then(|i| self.get(i + 1))
    }

    pub fn affordances(&self, current: &str) -> Affordances {
        Affordances {
            can_go_previous: self.previous_joke(current).is_some(),
            can_go_next: self.next_joke(current).is_some(),
        }
    }

    pub fn affordances_at(&self, index: usize) -> Affordances {
        Affordances {
            can_go_previous: index > 0 && index < self.entries.len(),
            can_go_next: index < self.entries.len().saturating_sub(1),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn load_entries<S: Storage>(storage: &S) -> Vec<String> {
    let raw = match storage.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("Could not read stored jokes: {}", e);
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Ignoring malformed stored jokes: {}", e);
            Vec::new()
        }
    }
}
