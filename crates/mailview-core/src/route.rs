//! Router adapter for the message view.
//!
//! Resolves the route's message id through the store and activates a
//! controller with everything it needs already in hand.

use tracing::debug;

use crate::Result;
use crate::controller::{MessageViewController, ViewContext};
use crate::model::MessageId;
use crate::service::{ConfirmDialog, MessageStore, Navigator};

/// Opens message views by id.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageRoute;

impl MessageRoute {
    /// Fetches `message_id` from `store` and activates its view.
    ///
    /// # Errors
    ///
    /// Returns the store's error, e.g. [`crate::Error::MessageNotFound`].
    pub async fn open<S, N, D>(
        message_id: &MessageId,
        context: ViewContext,
        store: S,
        navigator: N,
        dialog: D,
    ) -> Result<MessageViewController<S, N, D>>
    where
        S: MessageStore,
        N: Navigator,
        D: ConfirmDialog,
    {
        debug!("Resolving message {}", message_id);
        let message = store.get(message_id).await?;
        Ok(MessageViewController::activate(message, context, store, navigator, dialog).await)
    }
}
