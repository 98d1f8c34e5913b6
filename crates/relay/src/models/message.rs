use serde::{Deserialize, Serialize};

/// The normalized chat turn sent to any backend.
///
/// `role` is relayed exactly as the client sent it; backends decide what to
/// do with roles they do not recognize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendMessage {
    pub role: String,
    pub content: String,
}

impl BackendMessage {
    pub fn new<R: Into<String>, C: Into<String>>(role: R, content: C) -> Self {
        BackendMessage {
            role: role.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_flat() {
        let message = BackendMessage::new("user", "hello");
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value, json!({"role": "user", "content": "hello"}));
    }
}
