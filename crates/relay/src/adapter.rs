//! Converts a UI request body into backend messages.
//!
//! The browser owns the inbound shape, so nothing here is allowed to fail: a
//! body without a `messages` array normalizes to no messages, and a list
//! element that is not a message-shaped object normalizes to an empty user
//! turn. Output length always matches the length of the `messages` array.

use serde_json::Value;

use crate::models::message::BackendMessage;
use crate::models::ui::UiMessage;

/// Normalize a raw request body into the flat message list backends accept.
pub fn normalize(body: &Value) -> Vec<BackendMessage> {
    let Some(items) = body.get("messages").and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .map(|item| {
            let message = serde_json::from_value::<UiMessage>(item.clone()).unwrap_or_default();
            let content = message.flatten();
            BackendMessage::new(message.role, content)
        })
        .collect()
}
