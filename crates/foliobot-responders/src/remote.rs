//! Remote completion responder.
//!
//! One request/response exchange with the completion service:
//! `POST {endpoint}/chat` with `{"message": ...}`, success body
//! `{"response": ...}`. Any non-success status or transport failure is
//! surfaced to the caller as `FoliobotError::Remote` — the session maps
//! it to a fixed apology line.

use async_trait::async_trait;
use foliobot_core::config::RemoteConfig;
use foliobot_core::error::{FoliobotError, Result};
use foliobot_core::traits::Responder;
use serde_json::{Value, json};
use std::time::Duration;

pub struct RemoteResponder {
    endpoint: String,
    client: reqwest::Client,
}

impl RemoteResponder {
    pub fn new(config: &RemoteConfig) -> Self {
        // The request is bounded so a stalled backend cannot leave the
        // typing indicator up forever.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();
        Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            client,
        }
    }
}

#[async_trait]
impl Responder for RemoteResponder {
    fn name(&self) -> &str {
        "remote"
    }

    async fn respond(&self, message: &str) -> Result<String> {
        let url = format!("{}/chat", self.endpoint);
        let body = json!({ "message": message });

        let resp = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| FoliobotError::Remote(format!("connection failed ({url}): {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(FoliobotError::Remote(format!("API error {status}: {text}")));
        }

        let json: Value = resp
            .json()
            .await
            .map_err(|e| FoliobotError::Remote(e.to_string()))?;

        json["response"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| FoliobotError::Remote("No response field in body".into()))
    }
}
