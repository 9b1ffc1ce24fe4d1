//! HTTP client for the dashboard server's `/api/*` endpoints.
//!
//! Every endpoint answers with the same JSON envelope:
//! `{"status": "success" | "error", "message"?: ..., "data"?: ...}`.

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

pub mod beach;
pub mod history;
pub mod weather;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error from one `/api/*` call.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("could not parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server answered, but with a non-2xx status, a non-success
    /// envelope, or a payload missing required fields.
    #[error("{}", .message.as_deref().unwrap_or("server reported failure"))]
    Api { message: Option<String> },
}

impl ApiError {
    /// Message for the error banner: the server-supplied one when present,
    /// a generic fallback otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Api { message: Some(m) } if !m.is_empty() => m.clone(),
            _ => "Failed to fetch weather data. Please try again.".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    status: String,
    message: Option<String>,
    data: Option<T>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}{path}` and unwrap the success envelope.
    async fn get_data<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let res = self.http.get(&url).query(query).send().await?;
        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            // Error bodies are not always the envelope; take the message
            // when one parses out.
            let message = serde_json::from_str::<Envelope<serde_json::Value>>(&body)
                .ok()
                .and_then(|e| e.message);
            tracing::debug!(%status, path, body = %truncate_body(&body), "request failed");
            return Err(ApiError::Api { message });
        }

        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        if envelope.status != "success" {
            return Err(ApiError::Api {
                message: envelope.message,
            });
        }

        envelope.data.ok_or(ApiError::Api { message: None })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Back off to a char boundary so multibyte bodies can't panic the slice.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_server_message() {
        let err = ApiError::Api {
            message: Some("No weather data found for City: Atlantis".to_string()),
        };
        assert_eq!(err.user_message(), "No weather data found for City: Atlantis");
    }

    #[test]
    fn user_message_falls_back_when_absent_or_empty() {
        let generic = "Failed to fetch weather data. Please try again.";
        assert_eq!(ApiError::Api { message: None }.user_message(), generic);
        assert_eq!(
            ApiError::Api { message: Some(String::new()) }.user_message(),
            generic
        );
    }

    #[test]
    fn new_trims_trailing_slash() {
        let client = ApiClient::new("http://127.0.0.1:5000/").expect("client builds");
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");
    }

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        // 1 ASCII byte + 100 two-byte chars = 201 bytes, with a char
        // straddling byte 200.
        let body = format!("a{}", "é".repeat(100));
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 203);
        assert_eq!(truncated.trim_end_matches("..."), &body[..199]);
    }
}
