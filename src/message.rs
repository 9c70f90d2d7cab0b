// src/message.rs
use serde::{Deserialize, Serialize};

use crate::error::ChatError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
}

impl ChatResponse {
    pub fn reply(text: impl Into<String>) -> Self {
        Self { reply: Some(text.into()) }
    }

    /// Interpret an arbitrary JSON body. Any truthy `reply` counts: strings
    /// are shown as-is, other values as their JSON text. `""`, `0`, `false`
    /// and `null` count as no reply.
    pub fn from_value(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        let reply = match value.get("reply") {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Bool(true)) => Some("true".to_string()),
            Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            Some(v @ (Value::Array(_) | Value::Object(_))) => Some(v.to_string()),
            _ => None,
        };
        Self { reply }
    }

    pub fn into_reply(self) -> Result<String, ChatError> {
        self.reply.ok_or(ChatError::MissingReply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_message_field() {
        let body = serde_json::to_value(ChatRequest { message: "hi".into() }).unwrap();
        assert_eq!(body, json!({ "message": "hi" }));
    }

    #[test]
    fn reply_shapes() {
        assert_eq!(ChatResponse::from_value(&json!({ "reply": "hello" })), ChatResponse::reply("hello"));
        assert_eq!(ChatResponse::from_value(&json!({})).reply, None);
        assert_eq!(ChatResponse::from_value(&json!({ "reply": "" })).reply, None);
        assert_eq!(ChatResponse::from_value(&json!({ "reply": 42 })), ChatResponse::reply("42"));
        assert_eq!(ChatResponse::from_value(&json!({ "reply": true })), ChatResponse::reply("true"));
        assert_eq!(ChatResponse::from_value(&json!({ "reply": ["a"] })), ChatResponse::reply(r#"["a"]"#));
        assert_eq!(ChatResponse::from_value(&json!({ "reply": 0 })).reply, None);
        assert_eq!(ChatResponse::from_value(&json!({ "reply": false })).reply, None);
        assert_eq!(ChatResponse::from_value(&json!({ "reply": null })).reply, None);
        assert_eq!(ChatResponse::from_value(&json!(["reply"])).reply, None);
        assert_eq!(ChatResponse::from_value(&json!("reply")).reply, None);
    }
}
