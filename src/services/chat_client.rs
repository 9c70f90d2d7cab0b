// src/services/chat_client.rs
use std::future::Future;

use reqwest::Url;
use tracing::debug;

use crate::{
    config::WidgetConfig,
    error::ChatError,
    message::{ChatRequest, ChatResponse},
};

/// The external chat service behind the widget.
pub trait ChatService: Send + Sync {
    fn send(&self, message: &str) -> impl Future<Output = Result<ChatResponse, ChatError>> + Send;
}

/// Talks to the chat service over HTTP: one `POST` per message.
#[derive(Debug, Clone)]
pub struct HttpChatService {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpChatService {
    pub fn new(config: &WidgetConfig) -> Result<Self, ChatError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Self::with_client(&config.endpoint, builder.build()?)
    }

    pub fn with_client(endpoint: &str, http: reqwest::Client) -> Result<Self, ChatError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| ChatError::InvalidEndpoint(format!("{endpoint}: {e}")))?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ChatService for HttpChatService {
    async fn send(&self, message: &str) -> Result<ChatResponse, ChatError> {
        debug!(endpoint = %self.endpoint, len = message.len(), "posting chat message");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&ChatRequest { message: message.to_string() })
            .send()
            .await?;

        // The status is not checked: a JSON body with a reply is a reply.
        let status = response.status();
        let body = response.bytes().await?;
        debug!(%status, bytes = body.len(), "chat service responded");

        let value: serde_json::Value = serde_json::from_slice(&body)?;
        if value.is_null() {
            return Err(ChatError::NullBody);
        }
        Ok(ChatResponse::from_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_endpoint() {
        let err = HttpChatService::new(&WidgetConfig::with_endpoint("not a url")).unwrap_err();
        assert!(matches!(err, ChatError::InvalidEndpoint(_)));
    }

    #[test]
    fn keeps_configured_endpoint() {
        let svc = HttpChatService::new(&WidgetConfig::with_endpoint("http://localhost:3000/chat")).unwrap();
        assert_eq!(svc.endpoint().path(), "/chat");
    }
}
