//! Draft model handed to the compose destination.

use serde::{Deserialize, Serialize};

use super::Message;

/// An unsaved, message-shaped value produced for composition.
///
/// `from` is `None` when the original had no recipient to answer as.
/// `to` is `None` when the user must pick a recipient.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Draft {
    /// Sender address, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Recipient address, if chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Subject line.
    pub subject: String,
    /// Plain text body.
    pub body: String,
}

/// What the compose destination is asked to open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "lowercase")]
pub enum ComposePayload {
    /// A freshly built reply or forward.
    Response(Draft),
    /// A stored draft re-opened exactly as saved.
    Existing(Message),
}
