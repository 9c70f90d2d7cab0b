// src/config.rs
use std::time::Duration;

use crate::error::ChatError;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/chat";
pub const DEFAULT_PENDING_TEXT: &str = "Analyzing...";
pub const DEFAULT_PROCESSING_FAILED_TEXT: &str = "Processing failed.";
pub const DEFAULT_SERVER_ERROR_TEXT: &str = "Server error.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub endpoint: String,
    pub pending_text: String,
    pub processing_failed_text: String,
    pub server_error_text: String,
    /// `None` waits for the service forever.
    pub timeout: Option<Duration>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            pending_text: DEFAULT_PENDING_TEXT.to_string(),
            processing_failed_text: DEFAULT_PROCESSING_FAILED_TEXT.to_string(),
            server_error_text: DEFAULT_SERVER_ERROR_TEXT.to_string(),
            timeout: None,
        }
    }
}

impl WidgetConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), ..Self::default() }
    }

    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ChatError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ChatError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("CHAT_ENDPOINT") {
            config.endpoint = v;
        }
        if let Some(v) = lookup("CHAT_PENDING_TEXT") {
            config.pending_text = v;
        }
        if let Some(v) = lookup("CHAT_PROCESSING_FAILED_TEXT") {
            config.processing_failed_text = v;
        }
        if let Some(v) = lookup("CHAT_SERVER_ERROR_TEXT") {
            config.server_error_text = v;
        }
        if let Some(v) = lookup("CHAT_TIMEOUT_SECS") {
            let secs: u64 = v
                .trim()
                .parse()
                .map_err(|_| ChatError::Config(format!("CHAT_TIMEOUT_SECS must be whole seconds, got {v:?}")))?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}
