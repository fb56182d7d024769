//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use mailview_core::{MessageAction, MessageId};

/// Open one message from a mailbox file and act on it.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "mailview", version, about)]
pub struct Args {
    /// Mailbox document to load.
    pub mailbox: PathBuf,

    /// Message to open.
    #[arg(value_parser = parse_message_id)]
    pub message_id: MessageId,

    /// Action to perform: edit, reply, forward or delete.
    #[arg(value_parser = clap::value_parser!(MessageAction))]
    pub action: MessageAction,

    /// Answer the delete confirmation with yes.
    #[arg(short = 'y', long = "yes")]
    pub assume_yes: bool,

    /// Config file overriding the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

fn parse_message_id(raw: &str) -> Result<MessageId, std::convert::Infallible> {
    Ok(MessageId::from(raw))
}
