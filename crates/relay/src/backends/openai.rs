use async_trait::async_trait;
use reqwest::Client;
use reqwest::StatusCode;
use serde_json::{json, Value};

use super::base::{Backend, Reply};
use super::configs::OpenAiBackendConfig;
use crate::errors::{BackendError, BackendResult};
use crate::models::message::BackendMessage;

/// Text returned when the completion API answers without any content.
const EMPTY_REPLY: &str = "No response";

/// Calls the chat-completion API directly, no intermediate backend.
///
/// Unlike the bridge, this backend has to interpret the upstream reply: the
/// browser expects plain text, so the first choice's message content becomes
/// the reply body.
pub struct OpenAiBackend {
    client: Client,
    config: OpenAiBackendConfig,
}

impl OpenAiBackend {
    pub fn new(config: OpenAiBackendConfig) -> BackendResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| BackendError::Internal(e.to_string()))?;

        Ok(Self { client, config })
    }

    async fn post(&self, payload: Value) -> BackendResult<Value> {
        let url = format!(
            "{}/v1/chat/completions",
            self.config.host.trim_end_matches('/')
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| BackendError::Unreachable(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json()
                .await
                .map_err(|e| BackendError::MalformedReply(e.to_string())),
            status => Err(BackendError::UpstreamStatus(status.as_u16())),
        }
    }
}

/// Pull the reply text out of a completion response.
fn extract_content(response: &Value) -> &str {
    response["choices"][0]["message"]["content"]
        .as_str()
        .filter(|content| !content.is_empty())
        .unwrap_or(EMPTY_REPLY)
}

#[async_trait]
impl Backend for OpenAiBackend {
    async fn forward(&self, messages: &[BackendMessage]) -> BackendResult<Reply> {
        let payload = json!({
            "model": self.config.model,
            "messages": messages,
        });

        let response = self.post(payload).await?;
        Ok(Reply::new(200, extract_content(&response)))
    }
}
