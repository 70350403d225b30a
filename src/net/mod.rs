pub mod http;
pub mod source;

pub use http::{HttpJokeSource, DEFAULT_ENDPOINT};
pub use source::{FetchError, JokeSource};

#[cfg(test)]
pub(crate) mod scripted;
