// src/widget/mod.rs
pub mod submit;

use crate::{
    config::WidgetConfig,
    services::{chat_client::ChatService, transcript::Transcript},
    state::InputField,
};

pub const SUBMIT_KEY: &str = "Enter";

/// User interactions the widget reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    SendClicked,
    KeyDown(String),
}

/// How one submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    ProcessingFailed,
    ServerError,
}

/// A chat widget bound to its message container, input field and service.
#[derive(Debug)]
pub struct ChatWidget<S> {
    transcript: Transcript,
    input: InputField,
    service: S,
    config: WidgetConfig,
}

impl<S: ChatService> ChatWidget<S> {
    pub fn new(transcript: Transcript, input: InputField, service: S, config: WidgetConfig) -> Self {
        Self { transcript, input, service, config }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &InputField {
        &self.input
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Dispatch a UI event. Only the send button and the Enter key submit.
    pub async fn handle_event(&self, event: WidgetEvent) -> Option<Outcome> {
        match event {
            WidgetEvent::SendClicked => self.submit().await,
            WidgetEvent::KeyDown(key) if key == SUBMIT_KEY => self.submit().await,
            WidgetEvent::KeyDown(_) => None,
        }
    }

    /// Tear the widget down, handing its parts back.
    pub fn into_parts(self) -> (Transcript, InputField, S) {
        (self.transcript, self.input, self.service)
    }
}
