use super::source::{FetchError, JokeSource};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://icanhazdadjoke.com/";

#[derive(Debug, Deserialize)]
struct JokeResponse {
    joke: String,
}

pub struct HttpJokeSource {
    client: Client,
    endpoint: Url,
}

impl HttpJokeSource {
    // icanhazdadjoke asks clients to identify themselves
    const USER_AGENT: &'static str = concat!(
        "joke-machine/",
        env!("CARGO_PKG_VERSION"),
        " (https://crates.io/crates/joke-machine)"
    );

    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(Self::USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl JokeSource for HttpJokeSource {
    fn fetch_joke(&mut self) -> Result<String, FetchError> {
        log::info!("Fetching joke from: {}", self.endpoint);
        let response = self
            .client
            .get(self.endpoint.as_str())
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown");
        log::info!("Response: status={}, content-type={}", status, content_type);

        check_status(status)?;
        let body = response.text()?;
        decode_joke(&body)
    }
}

fn check_status(status: StatusCode) -> Result<(), FetchError> {
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    Ok(())
}

/// Pulls the `joke` field out of a response body.
fn decode_joke(body: &str) -> Result<String, FetchError> {
    let response: JokeResponse = serde_json::from_str(body)?;
    Ok(response.joke)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_joke_ignores_extra_fields() {
        let body = r#"{"id":"R7UfaahVfFd","joke":"My dog used to chase people on a bike a lot. It got so bad I had to take his bike away.","status":200}"#;
        let joke = decode_joke(body).unwrap();
        assert_eq!(
            joke,
            "My dog used to chase people on a bike a lot. It got so bad I had to take his bike away."
        );
    }

    #[test]
    fn test_check_status() {
        assert!(check_status(StatusCode::OK).is_ok());
        assert!(check_status(StatusCode::NO_CONTENT).is_ok());

        let err = check_status(StatusCode::SERVICE_UNAVAILABLE).unwrap_err();
        assert!(matches!(err, FetchError::Status(503)));
        assert_eq!(err.to_string(), "HTTP error! Status: 503");

        assert!(matches!(check_status(StatusCode::NOT_FOUND), Err(FetchError::Status(404))));
    }

    #[test]
    fn test_decode_joke_missing_field() {
        let err = decode_joke(r#"{"status":200}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_decode_joke_html_body() {
        let err = decode_joke("<!DOCTYPE html><html></html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_new_keeps_endpoint() {
        let endpoint = Url::parse(DEFAULT_ENDPOINT).unwrap();
        let source = HttpJokeSource::new(endpoint.clone(), Duration::from_secs(5)).unwrap();
        assert_eq!(source.endpoint(), &endpoint);
    }
}
