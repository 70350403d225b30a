pub mod app;
pub mod net;
pub mod storage;
pub mod ui;

pub use app::{HistoryManager, JokeWidget};
