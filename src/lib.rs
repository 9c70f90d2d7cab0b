pub mod config;
pub mod error;
pub mod message;
pub mod services;
pub mod state;
pub mod terminal;
pub mod widget;

pub use config::WidgetConfig;
pub use error::{ChatError, ErrorKind};
pub use services::chat_client::{ChatService, HttpChatService};
pub use services::transcript::{ChatMessage, MessageId, Sender, StyleHint, Transcript, TranscriptEvent};
pub use state::InputField;
pub use widget::{ChatWidget, Outcome, WidgetEvent};
