// src/state.rs
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::services::chat_client::HttpChatService;
use crate::widget::ChatWidget;

pub type SharedWidget<S = HttpChatService> = Arc<ChatWidget<S>>;

/// The widget's text input. Clones share the same buffer.
#[derive(Clone, Debug, Default)]
pub struct InputField {
    value: Arc<RwLock<String>>,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set(&self, text: impl Into<String>) {
        *self.value.write().await = text.into();
    }

    pub async fn value(&self) -> String {
        self.value.read().await.clone()
    }

    /// Take the trimmed text in one step, or leave the field alone when it
    /// is blank.
    pub async fn take_trimmed(&self) -> Option<String> {
        let mut value = self.value.write().await;
        let text = value.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_string();
        value.clear();
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clones_share_the_buffer() {
        let input = InputField::new();
        let shared = input.clone();
        input.set("hello").await;
        assert_eq!(shared.value().await, "hello");
        assert_eq!(shared.take_trimmed().await.as_deref(), Some("hello"));
        assert_eq!(input.value().await, "");
    }

    #[tokio::test]
    async fn take_trimmed_skips_blank() {
        let input = InputField::new();
        input.set("   ").await;
        assert_eq!(input.take_trimmed().await, None);
        assert_eq!(input.value().await, "   ");

        input.set("  hi \n").await;
        assert_eq!(input.take_trimmed().await.as_deref(), Some("hi"));
        assert_eq!(input.value().await, "");
    }
}
