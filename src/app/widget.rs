use super::history::{Affordances, FetchOutcome, HistoryManager};
use super::settings::{ExhaustedBehavior, WidgetSettings};
use crate::net::JokeSource;
use crate::storage::Storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetAction {
    GetJoke,
    Previous,
    Next,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    /// Display or status changed and should be redrawn
    Updated,
    /// The control was disabled or had nowhere to go
    Ignored,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

/// The joke display plus its three controls.
///
/// The position of the shown joke is tracked as an index into the history
/// rather than recovered from the displayed text.
pub struct JokeWidget<S, J> {
    manager: HistoryManager<S, J>,
    settings: WidgetSettings,
    display: String,
    position: Option<usize>,
    controls: Controls,
    status: Option<String>,
}

impl<S: Storage, J: JokeSource> JokeWidget<S, J> {
    pub fn new(manager: HistoryManager<S, J>, settings: WidgetSettings) -> Self {
        let (display, position, previous_enabled) = match manager.latest() {
            Some(latest) => (latest.to_string(), Some(manager.len() - 1), true),
            None => (settings.placeholder.clone(), None, false),
        };

        Self {
            manager,
            settings,
            display,
            position,
            controls: Controls {
                previous_enabled,
                next_enabled: false,
            },
            status: None,
        }
    }

    pub fn activate(&mut self, action: WidgetAction) -> ActionResult {
        match action {
            WidgetAction::GetJoke => self.get_joke(),
            WidgetAction::Previous => self.previous(),
            WidgetAction::Next => self.next(),
            WidgetAction::Quit => ActionResult::Quit,
        }
    }

    // Always available; the console loop runs one action at a time
    fn get_joke(&mut self) -> ActionResult {
        match self.manager.fetch_joke(self.settings.max_attempts) {
            Ok(FetchOutcome::Joke(joke)) => {
                self.display = joke;
                self.show_position(self.manager.len() - 1);
                self.status = None;
            }
            Ok(FetchOutcome::Exhausted) => {
                log::info!("Fetch exhausted, on_exhausted={:?}", self.settings.on_exhausted);
                if self.settings.on_exhausted == ExhaustedBehavior::Message {
                    self.display = self.settings.exhausted_message.clone();
                }
                self.status = None;
            }
            Err(e) => {
                log::error!("Could not get joke: {}", e);
                self.status = Some(format!("Could not get joke: {}", e));
            }
        }
        ActionResult::Updated
    }

    fn previous(&mut self) -> ActionResult {
        if !self.controls.previous_enabled {
            return ActionResult::Ignored;
        }
        match self.position {
            Some(i) if i > 0 => {
                self.show_position(i - 1);
                ActionResult::Updated
            }
            _ => ActionResult::Ignored,
        }
    }

    fn next(&mut self) -> ActionResult {
        if !self.controls.next_enabled {
            return ActionResult::Ignored;
        }
        match self.position {
            Some(i) if i + 1 < self.manager.len() => {
                self.show_position(i + 1);
                ActionResult::Updated
            }
            _ => ActionResult::Ignored,
        }
    }

    fn show_position(&mut self, index: usize) {
        if let Some(joke) = self.manager.get(index) {
            self.display = joke.to_string();
            self.position = Some(index);
        }
        self.update_controls();
    }

    fn update_controls(&mut self) {
        let Affordances {
            can_go_previous,
            can_go_next,
        } = match self.position {
            Some(i) => self.manager.affordances_at(i),
            None => Affordances::default(),
        };
        self.controls.previous_enabled = can_go_previous;
        self.controls.next_enabled = can_go_next;
    }
}

impl<S, J> JokeWidget<S, J> {
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn manager(&self) -> &HistoryManager<S, J> {
        &self.manager
    }
}
