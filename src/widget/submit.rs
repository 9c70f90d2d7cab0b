// src/widget/submit.rs
use tracing::{debug, warn};

use super::{ChatWidget, Outcome};
use crate::{
    error::ErrorKind,
    services::{
        chat_client::ChatService,
        transcript::{Sender, StyleHint},
    },
};

impl<S: ChatService> ChatWidget<S> {
    /// Submit whatever is in the input field.
    ///
    /// Blank input is ignored and left in place. Otherwise the field is
    /// cleared and the text goes through the same flow as [`ChatWidget::send`].
    pub async fn submit(&self) -> Option<Outcome> {
        let text = self.input.take_trimmed().await?;

        self.transcript.append(Sender::User, StyleHint::Normal, text.as_str()).await;
        Some(self.exchange(&text).await)
    }

    /// Submit `text` directly, leaving the input field alone.
    pub async fn send(&self, text: &str) -> Option<Outcome> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.transcript.append(Sender::User, StyleHint::Normal, text).await;
        Some(self.exchange(text).await)
    }

    async fn exchange(&self, text: &str) -> Outcome {
        let placeholder = self
            .transcript
            .append(Sender::Bot, StyleHint::Pending, self.config.pending_text.as_str())
            .await;

        let result = self.service.send(text).await.and_then(|r| r.into_reply());

        // Only this submission's placeholder; others may still be waiting.
        self.transcript.remove(placeholder).await;

        let outcome = match result {
            Ok(reply) => {
                debug!(%placeholder, "reply received");
                Outcome::Reply(reply)
            }
            Err(e) => match e.kind() {
                ErrorKind::Application => {
                    warn!(error = %e, "chat service gave no reply");
                    Outcome::ProcessingFailed
                }
                ErrorKind::Transport => {
                    warn!(error = %e, "chat request failed");
                    Outcome::ServerError
                }
            },
        };

        let shown = match &outcome {
            Outcome::Reply(reply) => reply.as_str(),
            Outcome::ProcessingFailed => self.config.processing_failed_text.as_str(),
            Outcome::ServerError => self.config.server_error_text.as_str(),
        };
        self.transcript.append(Sender::Bot, StyleHint::Normal, shown).await;

        outcome
    }
}
