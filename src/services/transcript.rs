// src/services/transcript.rs
use std::{
    fmt::{self, Debug},
    sync::{Arc, Mutex, PoisonError},
    time::Instant,
};

use tokio::sync::{RwLock, mpsc};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageId(Uuid);

impl MessageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleHint {
    Normal,
    Pending,
}

#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub style: StyleHint,
    pub created_at: Instant,
}

impl ChatMessage {
    pub fn is_pending(&self) -> bool {
        self.style == StyleHint::Pending
    }
}

#[derive(Clone, Debug)]
pub enum TranscriptEvent {
    Appended(ChatMessage),
    Removed(MessageId),
}

#[derive(Default)]
struct Inner {
    messages: Vec<ChatMessage>,
    scroll_anchor: Option<MessageId>,
}

impl Inner {
    fn rescroll(&mut self) {
        self.scroll_anchor = self.messages.last().map(|m| m.id);
    }
}

/// Ordered message container shared by every submission of a widget.
#[derive(Clone)]
pub struct Transcript {
    inner: Arc<RwLock<Inner>>,
    subscribers: Arc<Mutex<Vec<mpsc::UnboundedSender<TranscriptEvent>>>>,
}

impl Debug for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transcript")
            .field("subscribers", &self.subscriber_list().len())
            .finish()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn subscriber_list(&self) -> std::sync::MutexGuard<'_, Vec<mpsc::UnboundedSender<TranscriptEvent>>> {
        self.subscribers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Callers hold the write lock, so every subscriber sees list order.
    fn notify(&self, event: TranscriptEvent) {
        self.subscriber_list().retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Append a message and scroll to it.
    pub async fn append(&self, sender: Sender, style: StyleHint, text: impl Into<String>) -> MessageId {
        let msg = ChatMessage {
            id: MessageId::new(),
            text: text.into(),
            sender,
            style,
            created_at: Instant::now(),
        };
        let id = msg.id;

        let mut guard = self.inner.write().await;
        guard.messages.push(msg.clone());
        guard.rescroll();
        self.notify(TranscriptEvent::Appended(msg));
        id
    }

    /// Remove a message by id. Returns false when it is already gone.
    pub async fn remove(&self, id: MessageId) -> bool {
        let mut guard = self.inner.write().await;
        let Some(pos) = guard.messages.iter().position(|m| m.id == id) else {
            return false;
        };
        guard.messages.remove(pos);
        guard.rescroll();
        self.notify(TranscriptEvent::Removed(id));
        true
    }

    pub async fn snapshot(&self) -> Vec<ChatMessage> {
        self.inner.read().await.messages.clone()
    }

    pub async fn get(&self, id: MessageId) -> Option<ChatMessage> {
        let guard = self.inner.read().await;
        guard.messages.iter().find(|m| m.id == id).cloned()
    }

    pub async fn last(&self) -> Option<ChatMessage> {
        self.inner.read().await.messages.last().cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.messages.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.messages.is_empty()
    }

    pub async fn pending_count(&self) -> usize {
        let guard = self.inner.read().await;
        guard.messages.iter().filter(|m| m.is_pending()).count()
    }

    /// The message the container is scrolled to.
    pub async fn scroll_anchor(&self) -> Option<MessageId> {
        self.inner.read().await.scroll_anchor
    }

    /// Every change from now on, in order. The channel is unbounded so a
    /// slow renderer never misses a message.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<TranscriptEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscriber_list().push(tx);
        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn append_scrolls_to_newest() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty().await);
        assert_eq!(transcript.scroll_anchor().await, None);

        let a = transcript.append(Sender::User, StyleHint::Normal, "hi").await;
        assert_eq!(transcript.scroll_anchor().await, Some(a));
        let b = transcript.append(Sender::Bot, StyleHint::Pending, "...").await;
        assert_eq!(transcript.scroll_anchor().await, Some(b));
        assert_eq!(transcript.len().await, 2);
        assert_eq!(transcript.pending_count().await, 1);
    }

    #[tokio::test]
    async fn remove_by_id() {
        let transcript = Transcript::new();
        let a = transcript.append(Sender::User, StyleHint::Normal, "hi").await;
        let b = transcript.append(Sender::Bot, StyleHint::Pending, "...").await;

        assert!(transcript.remove(b).await);
        assert!(!transcript.remove(b).await);
        assert_eq!(transcript.scroll_anchor().await, Some(a));
        assert!(transcript.get(b).await.is_none());
        assert_eq!(transcript.last().await.map(|m| m.id), Some(a));
    }

    #[test]
    fn id_displays_as_uuid() {
        let id = MessageId::new();
        let shown = id.to_string();
        assert_eq!(shown.len(), 36);
        assert_eq!(shown, format!("{}", id.0));
    }

    #[tokio::test]
    async fn subscribers_get_every_event() {
        let transcript = Transcript::new();
        let mut events = transcript.subscribe();
        let dropped = transcript.subscribe();
        drop(dropped);

        for i in 0..2000 {
            transcript.append(Sender::User, StyleHint::Normal, format!("m{i}")).await;
        }

        let mut count = 0;
        while let Ok(event) = events.try_recv() {
            let TranscriptEvent::Appended(msg) = event else { panic!("unexpected removal") };
            assert_eq!(msg.text, format!("m{count}"));
            count += 1;
        }
        assert_eq!(count, 2000);
        assert_eq!(transcript.subscriber_list().len(), 1);
    }
}
