use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use super::base::{Backend, Reply};
use crate::errors::{BackendError, BackendResult};
use crate::models::message::BackendMessage;

/// An intermediate chat backend that accepts `{"messages": [...]}` and
/// answers with plain text. Status and body are relayed verbatim; this side
/// does not interpret what the backend said.
pub struct BridgeBackend {
    client: Client,
    url: String,
}

impl BridgeBackend {
    pub fn new<S: Into<String>>(url: S) -> BackendResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| BackendError::Internal(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl Backend for BridgeBackend {
    async fn forward(&self, messages: &[BackendMessage]) -> BackendResult<Reply> {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "messages": messages }))
            .send()
            .await
            .map_err(|e| BackendError::Unreachable(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Unreachable(e.to_string()))?;

        Ok(Reply::new(status, text))
    }
}
