//! Terminal-backed collaborators: a stdin confirmation prompt and a
//! navigator that prints each request as JSON.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use mailview_core::{ConfirmDialog, NavigationRequest, Navigator};

/// Confirmation answered on the terminal, or fixed up front.
pub enum TerminalDialog {
    /// Ask on stdin.
    Prompt,
    /// Always give this answer.
    Assume(bool),
}

impl ConfirmDialog for TerminalDialog {
    async fn confirm(&self, prompt: &str, detail: Option<&str>) -> bool {
        match self {
            Self::Assume(answer) => *answer,
            Self::Prompt => {
                match detail {
                    Some(detail) => eprint!("{prompt} {detail} [y/N] "),
                    None => eprint!("{prompt} [y/N] "),
                }
                if let Err(e) = std::io::stderr().flush() {
                    tracing::debug!("Failed to flush confirmation prompt: {}", e);
                }

                let mut line = String::new();
                match BufReader::new(tokio::io::stdin()).read_line(&mut line).await {
                    Ok(_) => matches!(line.trim(), "y" | "Y" | "yes"),
                    Err(e) => {
                        tracing::warn!("Failed to read confirmation: {}", e);
                        false
                    }
                }
            }
        }
    }
}

/// Prints navigation requests to stdout.
pub struct PrintNavigator;

impl Navigator for PrintNavigator {
    async fn go_to(&self, request: NavigationRequest) -> mailview_core::Result<()> {
        tracing::info!("Navigating to {}", request.destination.name());
        println!("{}", serde_json::to_string(&request)?);
        Ok(())
    }
}
