// src/terminal.rs
//! Line-oriented front-end: each input line is one submission, and the
//! transcript is printed as it changes.

use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt},
    task::JoinSet,
};
use tracing::warn;

use crate::{
    services::{
        chat_client::ChatService,
        transcript::{ChatMessage, Sender, TranscriptEvent},
    },
    state::SharedWidget,
};

pub fn render_line(msg: &ChatMessage) -> String {
    let who = match msg.sender {
        Sender::User => "you",
        Sender::Bot => "bot",
    };
    if msg.is_pending() {
        format!("{who}> ({})", msg.text)
    } else {
        format!("{who}> {}", msg.text)
    }
}

async fn render<W>(out: &mut W, event: TranscriptEvent) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    // A terminal cannot take a line back, so removals print nothing.
    if let TranscriptEvent::Appended(msg) = event {
        out.write_all(render_line(&msg).as_bytes()).await?;
        out.write_all(b"\n").await?;
        out.flush().await?;
    }
    Ok(())
}

/// Run until `input` is exhausted and every submission has resolved.
pub async fn run<S, R, W>(widget: SharedWidget<S>, input: R, mut output: W) -> anyhow::Result<()>
where
    S: ChatService + 'static,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut events = widget.transcript().subscribe();
    let mut lines = input.lines();
    let mut in_flight = JoinSet::new();
    let mut eof = false;

    loop {
        if eof && in_flight.is_empty() {
            break;
        }

        tokio::select! {
            line = lines.next_line(), if !eof => match line? {
                Some(line) => {
                    let widget = widget.clone();
                    in_flight.spawn(async move { widget.send(&line).await });
                }
                None => eof = true,
            },
            event = events.recv() => match event {
                Some(event) => render(&mut output, event).await?,
                None => break,
            },
            Some(joined) = in_flight.join_next() => {
                if let Err(e) = joined {
                    warn!(error = %e, "submission task failed");
                }
            }
        }
    }

    // Everything left was sent before the last submission finished.
    while let Ok(event) = events.try_recv() {
        render(&mut output, event).await?;
    }
    Ok(())
}
