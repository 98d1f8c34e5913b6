use async_trait::async_trait;

use crate::errors::BackendResult;
use crate::models::message::BackendMessage;

/// What came back from upstream, relayed to the browser as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub text: String,
}

impl Reply {
    pub fn new<S: Into<String>>(status: u16, text: S) -> Self {
        Reply {
            status,
            text: text.into(),
        }
    }
}

/// Base trait for chat backends (intermediate bridge, completion API, etc)
#[async_trait]
pub trait Backend: Send + Sync {
    /// Send the normalized history upstream and await the full reply.
    async fn forward(&self, messages: &[BackendMessage]) -> BackendResult<Reply>;
}
