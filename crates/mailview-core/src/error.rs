//! Error types for the core library.

use thiserror::Error;

use crate::model::{MessageAction, MessageId};

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No message with the given id exists in storage.
    #[error("Message not found: {0}")]
    MessageNotFound(MessageId),

    /// An action name outside `edit`, `reply`, `forward` and `delete`.
    #[error("Unknown message action: {0}")]
    UnknownAction(String),

    /// A sort order string that could not be parsed.
    #[error("Invalid sort order: {0}")]
    InvalidSortOrder(String),

    /// The folder policy does not permit the requested action.
    #[error("Action not permitted in this folder: {0}")]
    ActionNotPermitted(MessageAction),

    /// The view has already handed control to another destination.
    #[error("Message view is no longer active")]
    ViewClosed,

    /// Storage backend failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Navigation backend failure.
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
