use std::sync::Arc;

use anyhow::Context;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chat_widget::{ChatWidget, HttpChatService, InputField, Transcript, WidgetConfig, terminal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = WidgetConfig::from_env().context("loading configuration")?;
    let service = HttpChatService::new(&config).context("building chat client")?;

    info!(endpoint = %service.endpoint(), "💬 chat widget ready, type a message and press Enter");

    let widget = Arc::new(ChatWidget::new(Transcript::new(), InputField::new(), service, config));
    terminal::run(widget, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}
