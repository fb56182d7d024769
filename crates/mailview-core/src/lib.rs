//! # mailview-core
//!
//! Logic behind the single-message view of a mail client.
//!
//! This crate provides:
//! - Folder action policy lookup ([`ActionPermissionSet`])
//! - Reply and forward draft construction ([`build_reply`], [`build_forward`])
//! - The post-delete navigation target ([`resolve_proximal`])
//! - The view controller tying them to storage, navigation and confirmation
//!   collaborators ([`MessageViewController`])
//!
//! # Example
//!
//! ```ignore
//! use mailview_core::{MessageRoute, ViewContext, RemoveOutcome};
//!
//! let mut view = MessageRoute::open(&id, context, &store, &navigator, &dialog).await?;
//! if view.actions().is_allowed("delete") {
//!     match view.remove().await? {
//!         RemoveOutcome::Declined => {}
//!         RemoveOutcome::Deleted { next } => println!("now showing {next:?}"),
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
mod error;
pub mod model;
pub mod permissions;
pub mod proximal;
pub mod response;
pub mod route;
pub mod service;
pub mod store;

pub use config::AppConfig;
pub use controller::{
    DELETE_PROMPT, MessageViewController, RemoveOutcome, ViewContext, ViewPhase,
};
pub use error::{Error, Result};
pub use model::{ComposePayload, Draft, Folder, Message, MessageAction, MessageId};
pub use permissions::ActionPermissionSet;
pub use proximal::{SortDirection, SortKey, SortOrder, resolve_proximal, sort_messages};
pub use response::{build_forward, build_reply, quote};
pub use route::MessageRoute;
pub use service::{
    ConfirmDialog, Destination, DestinationKind, MessageStore, NavigationOptions,
    NavigationRequest, Navigator,
};
pub use store::{InMemoryStore, Mailbox};
