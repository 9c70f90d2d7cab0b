// src/error.rs
use thiserror::Error;

/// How a failed exchange is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The service answered, but without a usable reply.
    Application,
    /// The exchange itself failed.
    Transport,
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response body is JSON null")]
    NullBody,

    #[error("response has no reply")]
    MissingReply,

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ChatError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChatError::MissingReply => ErrorKind::Application,
            _ => ErrorKind::Transport,
        }
    }
}
