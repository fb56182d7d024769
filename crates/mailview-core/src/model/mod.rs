//! Domain models for the message view.

mod draft;
mod folder;
mod message;

pub use draft::{ComposePayload, Draft};
pub use folder::{Folder, MessageAction};
pub use message::{Message, MessageId};
