//! `mailview` - open one message from a mailbox file and act on it.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod cli;
mod terminal;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mailview_core::{
    AppConfig, InMemoryStore, Mailbox, MessageAction, MessageRoute, RemoveOutcome, ViewContext,
};

use cli::Args;
use terminal::{PrintNavigator, TerminalDialog};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mailview=info,mailview_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let config = match args.config.clone().or_else(AppConfig::default_path) {
        Some(path) => AppConfig::load(&path)
            .await
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    let mailbox = Mailbox::load(&args.mailbox)
        .await
        .with_context(|| format!("loading mailbox {}", args.mailbox.display()))?;
    info!(
        "Loaded {} messages from folder {:?}",
        mailbox.messages.len(),
        mailbox.folder.name
    );

    let context = ViewContext::new(
        mailbox.folder.clone(),
        mailbox.messages.clone(),
        config.sort,
    );
    let store = InMemoryStore::from(mailbox);
    let dialog = if args.assume_yes {
        TerminalDialog::Assume(true)
    } else {
        TerminalDialog::Prompt
    };

    let mut view = MessageRoute::open(&args.message_id, context, &store, PrintNavigator, dialog)
        .await
        .with_context(|| format!("opening message {}", args.message_id))?;
    info!(
        "Folder permits: {:?}",
        view.actions().iter().collect::<Vec<_>>()
    );

    match args.action {
        MessageAction::Reply => {
            view.reply().await?;
        }
        MessageAction::Forward => {
            view.forward().await?;
        }
        MessageAction::Edit => view.edit_draft().await?,
        MessageAction::Delete => match view.remove().await? {
            RemoveOutcome::Declined => info!("Deletion cancelled"),
            RemoveOutcome::Deleted { next } => {
                info!("Deleted; {} messages remain", store.len());
                if next.is_none() {
                    info!("Folder is now empty");
                }
            }
        },
    }

    Ok(())
}
