//! Folder (mailbox) data model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// An action a folder may permit on its messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageAction {
    /// Re-open a saved draft in compose.
    Edit,
    /// Reply to the sender.
    Reply,
    /// Forward to a new recipient.
    Forward,
    /// Delete the message.
    Delete,
}

impl MessageAction {
    /// All actions, in display order.
    pub const ALL: [Self; 4] = [Self::Edit, Self::Reply, Self::Forward, Self::Delete];

    /// Convert to the policy string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Reply => "reply",
            Self::Forward => "forward",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for MessageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "edit" => Ok(Self::Edit),
            "reply" => Ok(Self::Reply),
            "forward" => Ok(Self::Forward),
            "delete" => Ok(Self::Delete),
            other => Err(Error::UnknownAction(other.to_string())),
        }
    }
}

/// A mail folder and the actions its policy permits.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Folder {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Permitted actions. Fixed for the lifetime of a view.
    pub actions: Vec<MessageAction>,
}

impl Folder {
    /// Creates a folder with the given policy.
    #[must_use]
    pub fn new(name: impl Into<String>, actions: impl Into<Vec<MessageAction>>) -> Self {
        Self {
            name: name.into(),
            actions: actions.into(),
        }
    }

    /// The usual inbox policy: reply, forward and delete.
    #[must_use]
    pub fn inbox() -> Self {
        Self::new(
            "Inbox",
            [
                MessageAction::Reply,
                MessageAction::Forward,
                MessageAction::Delete,
            ],
        )
    }

    /// The usual drafts policy: edit and delete.
    #[must_use]
    pub fn drafts() -> Self {
        Self::new("Drafts", [MessageAction::Edit, MessageAction::Delete])
    }
}
