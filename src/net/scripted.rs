use super::source::{FetchError, JokeSource};
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub enum Reply {
    Joke(String),
    Status(u16),
    /// A body that is not a joke object
    Malformed,
}

/// Replays canned replies in order, then repeats the fallback reply.
pub struct ScriptedSource {
    replies: VecDeque<Reply>,
    fallback: Option<Reply>,
    requests: usize,
}

impl ScriptedSource {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: replies.into(),
            fallback: None,
            requests: 0,
        }
    }

    pub fn jokes(jokes: &[&str]) -> Self {
        Self::new(jokes.iter().map(|j| Reply::Joke(j.to_string())).collect())
    }

    pub fn repeating(joke: &str) -> Self {
        Self {
            replies: VecDeque::new(),
            fallback: Some(Reply::Joke(joke.to_string())),
            requests: 0,
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests
    }
}

impl JokeSource for ScriptedSource {
    fn fetch_joke(&mut self) -> Result<String, FetchError> {
        self.requests += 1;
        let reply = self
            .replies
            .pop_front()
            .or_else(|| self.fallback.clone())
            .unwrap_or(Reply::Status(500));
        match reply {
            Reply::Joke(joke) => Ok(joke),
            Reply::Status(code) => Err(FetchError::Status(code)),
            Reply::Malformed => Err(serde_json::from_str::<()>("<html>").unwrap_err().into()),
        }
    }
}
