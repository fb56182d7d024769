//! Collaborator contracts the message view calls through.
//!
//! Storage, navigation and the confirmation dialog live outside this crate;
//! the controller only sees these traits.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::model::{ComposePayload, Message, MessageId};

/// Persistent message storage.
pub trait MessageStore {
    /// Fetches a message by id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MessageNotFound`] if no such message exists,
    /// or a backend error.
    fn get(&self, id: &MessageId) -> impl Future<Output = Result<Message>> + Send;

    /// Inserts or replaces a message.
    ///
    /// # Errors
    ///
    /// Returns a backend error if the write fails.
    fn put(&self, message: &Message) -> impl Future<Output = Result<()>> + Send;

    /// Deletes a message.
    ///
    /// # Errors
    ///
    /// Returns a backend error if the delete fails.
    fn remove(&self, message: &Message) -> impl Future<Output = Result<()>> + Send;
}

/// Asks the user to confirm a destructive action.
pub trait ConfirmDialog {
    /// Resolves to `true` only on explicit affirmation. Dismissal is `false`.
    fn confirm(&self, prompt: &str, detail: Option<&str>) -> impl Future<Output = bool> + Send;
}

/// Executes navigation between views.
pub trait Navigator {
    /// Requests a transition.
    ///
    /// # Errors
    ///
    /// Returns a backend error if the transition is rejected.
    fn go_to(&self, request: NavigationRequest) -> impl Future<Output = Result<()>> + Send;
}

impl<T: MessageStore + ?Sized> MessageStore for &T {
    fn get(&self, id: &MessageId) -> impl Future<Output = Result<Message>> + Send {
        (**self).get(id)
    }

    fn put(&self, message: &Message) -> impl Future<Output = Result<()>> + Send {
        (**self).put(message)
    }

    fn remove(&self, message: &Message) -> impl Future<Output = Result<()>> + Send {
        (**self).remove(message)
    }
}

impl<T: ConfirmDialog + ?Sized> ConfirmDialog for &T {
    fn confirm(&self, prompt: &str, detail: Option<&str>) -> impl Future<Output = bool> + Send {
        (**self).confirm(prompt, detail)
    }
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn go_to(&self, request: NavigationRequest) -> impl Future<Output = Result<()>> + Send {
        (**self).go_to(request)
    }
}

/// Where a navigation request leads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "destination", rename_all = "snake_case")]
pub enum Destination {
    /// The compose view, opened on a payload.
    Compose {
        /// What to compose.
        payload: ComposePayload,
    },
    /// Another message in the same folder.
    Message {
        /// Message to show.
        message_id: MessageId,
    },
    /// The folder's message list with no message selected.
    Folder,
}

impl Destination {
    /// Kind of this destination, without parameters.
    #[must_use]
    pub const fn kind(&self) -> DestinationKind {
        match self {
            Self::Compose { .. } => DestinationKind::Compose,
            Self::Message { .. } => DestinationKind::Message,
            Self::Folder => DestinationKind::Folder,
        }
    }

    /// Stable destination name for router adapters.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind().name()
    }
}

/// Destination without parameters, used to name reload targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationKind {
    /// Compose view.
    Compose,
    /// Single message view.
    Message,
    /// Folder message list.
    Folder,
}

impl DestinationKind {
    /// Stable destination name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Compose => "compose",
            Self::Message => "folder.message",
            Self::Folder => "folder",
        }
    }
}

/// Options attached to a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationOptions {
    /// Destination whose data must be re-fetched before display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reload: Option<DestinationKind>,
}

/// A single navigation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRequest {
    /// Target view and its parameters.
    #[serde(flatten)]
    pub destination: Destination,
    /// Request options.
    #[serde(default)]
    pub options: NavigationOptions,
}

impl NavigationRequest {
    /// Navigation with default options.
    #[must_use]
    pub fn to(destination: Destination) -> Self {
        Self {
            destination,
            options: NavigationOptions::default(),
        }
    }

    /// Navigation that forces `kind` to reload.
    #[must_use]
    pub fn reloading(destination: Destination, kind: DestinationKind) -> Self {
        Self {
            destination,
            options: NavigationOptions { reload: Some(kind) },
        }
    }

    /// Opens compose on `payload`.
    #[must_use]
    pub fn compose(payload: ComposePayload) -> Self {
        Self::to(Destination::Compose { payload })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_names() {
        assert_eq!(Destination::Folder.name(), "folder");
        assert_eq!(
            Destination::Message {
                message_id: "3".into()
            }
            .name(),
            "folder.message"
        );
    }

    #[test]
    fn test_request_json_shape() {
        let request = NavigationRequest::reloading(
            Destination::Message {
                message_id: 3_u64.into(),
            },
            DestinationKind::Folder,
        );
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["destination"], "message");
        assert_eq!(value["message_id"], "3");
        assert_eq!(value["options"]["reload"], "folder");
    }
}
