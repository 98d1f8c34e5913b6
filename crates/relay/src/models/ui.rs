use serde::Deserialize;
use serde_json::Value;

/// One part of a UI chat turn.
///
/// Only the `text` variant carries payload the proxy forwards. Every other
/// tag (images, tool invocations, attachments, whatever the UI grows next)
/// lands on the catch-all variant and is dropped during flattening.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum UiPart {
    Text {
        #[serde(default)]
        text: String,
    },
    #[serde(other)]
    Other,
}

impl UiPart {
    /// Get the text payload if this is a text part
    pub fn as_text(&self) -> Option<&str> {
        match self {
            UiPart::Text { text } => Some(text),
            UiPart::Other => None,
        }
    }
}

/// A chat turn as the browser sends it.
///
/// `parts` and `content` stay loosely typed: the wire shape is client
/// controlled and a shape mismatch must degrade, not fail.
#[derive(Debug, Clone, Deserialize)]
pub struct UiMessage {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub parts: Option<Value>,
    #[serde(default)]
    pub content: Option<Value>,
}

impl Default for UiMessage {
    fn default() -> Self {
        UiMessage {
            id: None,
            role: default_role(),
            parts: None,
            content: None,
        }
    }
}

impl UiMessage {
    /// Flatten this turn into the single string a backend message carries.
    ///
    /// If `parts` is an array, text parts are concatenated in order with no
    /// separator; anything unparseable counts as a non-text part. Otherwise
    /// the legacy `content` string is used, defaulting to empty.
    pub fn flatten(&self) -> String {
        match self.parts.as_ref().and_then(Value::as_array) {
            Some(parts) => parts
                .iter()
                .map(|part| serde_json::from_value::<UiPart>(part.clone()).unwrap_or(UiPart::Other))
                .filter_map(|part| match part {
                    UiPart::Text { text } => Some(text),
                    UiPart::Other => None,
                })
                .collect(),
            None => self
                .content
                .as_ref()
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

fn default_role() -> String {
    "user".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_part_deserializes() {
        let part: UiPart = serde_json::from_value(json!({"type": "text", "text": "hi"})).unwrap();
        assert_eq!(part, UiPart::Text { text: "hi".into() });
        assert_eq!(part.as_text(), Some("hi"));
    }

    #[test]
    fn test_unknown_part_tag_is_other() {
        let part: UiPart =
            serde_json::from_value(json!({"type": "image", "url": "x.png"})).unwrap();
        assert_eq!(part, UiPart::Other);
        assert_eq!(part.as_text(), None);
    }

    #[test]
    fn test_text_part_without_payload_is_empty() {
        let part: UiPart = serde_json::from_value(json!({"type": "text"})).unwrap();
        assert_eq!(part.as_text(), Some(""));
    }

    #[test]
    fn test_flatten_concatenates_text_parts_in_order() {
        let message: UiMessage = serde_json::from_value(json!({
            "role": "user",
            "parts": [
                {"type": "text", "text": "a"},
                {"type": "image", "data": "..."},
                {"type": "text", "text": "b"}
            ]
        }))
        .unwrap();
        assert_eq!(message.flatten(), "ab");
    }

    #[test]
    fn test_flatten_falls_back_to_content() {
        let message: UiMessage =
            serde_json::from_value(json!({"role": "assistant", "content": "hello"})).unwrap();
        assert_eq!(message.flatten(), "hello");
    }

    #[test]
    fn test_flatten_non_array_parts_uses_content() {
        let message: UiMessage = serde_json::from_value(json!({
            "role": "user",
            "parts": "not-a-list",
            "content": "fallback"
        }))
        .unwrap();
        assert_eq!(message.flatten(), "fallback");
    }

    #[test]
    fn test_missing_role_defaults_to_user() {
        let message: UiMessage = serde_json::from_value(json!({"content": "x"})).unwrap();
        assert_eq!(message.role, "user");
    }
}
