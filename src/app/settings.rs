use super::history::DEFAULT_MAX_ATTEMPTS;
use crate::net::DEFAULT_ENDPOINT;
use crate::storage::FileStorage;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// What the display shows when a fetch only produced jokes already seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ExhaustedBehavior {
    /// Leave the current joke on screen
    #[default]
    Keep,
    /// Replace the display with `exhausted_message`
    Message,
}

#[derive(Debug, Clone)]
pub struct WidgetSettings {
    pub endpoint: Url,
    pub store_path: PathBuf,
    pub max_attempts: u32,
    pub timeout: Duration,
    pub on_exhausted: ExhaustedBehavior,
    pub placeholder: String,
    pub exhausted_message: String,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            store_path: FileStorage::default_path(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            timeout: Duration::from_secs(30),
            on_exhausted: ExhaustedBehavior::Keep,
            placeholder: "Press 'g' to get a joke!".to_string(),
            exhausted_message: "No new jokes right now, try again later.".to_string(),
        }
    }
}
