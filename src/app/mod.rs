pub mod history;
pub mod settings;
pub mod widget;

pub use history::{Affordances, FetchOutcome, HistoryManager};
pub use settings::{ExhaustedBehavior, WidgetSettings};
pub use widget::{ActionResult, Controls, JokeWidget, WidgetAction};
