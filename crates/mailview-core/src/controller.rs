//! Controller for the single-message view.
//!
//! Activation marks the message read. Reply, forward and edit hand a payload
//! to the compose destination. Delete asks for confirmation, removes the
//! message and moves on to its nearest sibling in the folder.

use tracing::{debug, info, warn};

use crate::model::{ComposePayload, Draft, Folder, Message, MessageAction, MessageId};
use crate::permissions::ActionPermissionSet;
use crate::proximal::{SortOrder, resolve_proximal};
use crate::response::{build_forward, build_reply};
use crate::service::{
    ConfirmDialog, Destination, DestinationKind, MessageStore, NavigationRequest, Navigator,
};
use crate::{Error, Result};

/// Prompt shown before deleting a message.
pub const DELETE_PROMPT: &str = "Delete?";

/// Lifecycle phase of a message view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewPhase {
    /// Showing the message and accepting actions.
    #[default]
    Viewing,
    /// The message was deleted; control is passing to another view.
    Transitioning,
}

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The user did not confirm. Nothing changed.
    Declined,
    /// The message was deleted and navigation was requested.
    Deleted {
        /// Sibling that became current, or `None` if the folder view was shown.
        next: Option<MessageId>,
    },
}

/// Folder context a message is displayed in.
#[derive(Debug, Clone, Default)]
pub struct ViewContext {
    /// Containing folder.
    pub folder: Folder,
    /// The folder's message list, as displayed.
    pub listing: Vec<Message>,
    /// Order the list is displayed in.
    pub sort: SortOrder,
}

impl ViewContext {
    /// Creates a context.
    #[must_use]
    pub const fn new(folder: Folder, listing: Vec<Message>, sort: SortOrder) -> Self {
        Self {
            folder,
            listing,
            sort,
        }
    }
}

/// Drives one message view from activation to teardown.
pub struct MessageViewController<S, N, D> {
    message: Message,
    context: ViewContext,
    actions: ActionPermissionSet,
    store: S,
    navigator: N,
    dialog: D,
    phase: ViewPhase,
}

impl<S, N, D> MessageViewController<S, N, D>
where
    S: MessageStore,
    N: Navigator,
    D: ConfirmDialog,
{
    /// Activates the view for `message`.
    ///
    /// The message is marked read and written back. A failed write is logged
    /// and otherwise left to the store.
    pub async fn activate(
        mut message: Message,
        context: ViewContext,
        store: S,
        navigator: N,
        dialog: D,
    ) -> Self {
        message.read = true;
        if let Err(e) = store.put(&message).await {
            warn!("Failed to persist read state for message {}: {}", message.id, e);
        }

        let actions = context.folder.actions.iter().collect();
        debug!(
            "Viewing message {} in folder {:?} (actions: {:?})",
            message.id, context.folder.name, context.folder.actions
        );

        Self {
            message,
            context,
            actions,
            store,
            navigator,
            dialog,
            phase: ViewPhase::Viewing,
        }
    }

    /// The displayed message.
    #[must_use]
    pub const fn message(&self) -> &Message {
        &self.message
    }

    /// The folder the message is shown in.
    #[must_use]
    pub const fn folder(&self) -> &Folder {
        &self.context.folder
    }

    /// Actions the folder permits.
    #[must_use]
    pub const fn actions(&self) -> &ActionPermissionSet {
        &self.actions
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> ViewPhase {
        self.phase
    }

    /// Opens compose on a reply to the displayed message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ActionNotPermitted`] if the folder forbids replies,
    /// [`Error::ViewClosed`] after deletion, or the navigator's error.
    pub async fn reply(&self) -> Result<Draft> {
        self.check(MessageAction::Reply)?;
        let draft = build_reply(&self.message);
        self.compose(ComposePayload::Response(draft.clone())).await?;
        Ok(draft)
    }

    /// Opens compose on a forward of the displayed message.
    ///
    /// # Errors
    ///
    /// Same as [`Self::reply`], for the forward action.
    pub async fn forward(&self) -> Result<Draft> {
        self.check(MessageAction::Forward)?;
        let draft = build_forward(&self.message);
        self.compose(ComposePayload::Response(draft.clone())).await?;
        Ok(draft)
    }

    /// Re-opens the displayed draft in compose, unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`Self::reply`], for the edit action.
    pub async fn edit_draft(&self) -> Result<()> {
        self.check(MessageAction::Edit)?;
        self.compose(ComposePayload::Existing(self.message.clone()))
            .await
    }

    /// Deletes the displayed message after confirmation.
    ///
    /// On confirmation the message is removed from the store, the view enters
    /// [`ViewPhase::Transitioning`], and navigation goes to the nearest
    /// sibling (or the folder) with the folder list reloaded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ActionNotPermitted`] or [`Error::ViewClosed`] before
    /// prompting. Store and navigator errors are returned as-is; a failed
    /// removal skips navigation and leaves the view in [`ViewPhase::Viewing`].
    pub async fn remove(&mut self) -> Result<RemoveOutcome> {
        self.check(MessageAction::Delete)?;

        if !self.dialog.confirm(DELETE_PROMPT, None).await {
            debug!("Deletion of message {} declined", self.message.id);
            return Ok(RemoveOutcome::Declined);
        }

        self.store.remove(&self.message).await?;
        info!("Deleted message {}", self.message.id);
        self.phase = ViewPhase::Transitioning;

        let next = resolve_proximal(
            &self.context.listing,
            self.context.sort,
            &self.message.id,
        );
        let destination = next.clone().map_or(Destination::Folder, |message_id| {
            Destination::Message { message_id }
        });
        self.navigator
            .go_to(NavigationRequest::reloading(
                destination,
                DestinationKind::Folder,
            ))
            .await?;

        Ok(RemoveOutcome::Deleted { next })
    }

    fn check(&self, action: MessageAction) -> Result<()> {
        if self.phase == ViewPhase::Transitioning {
            return Err(Error::ViewClosed);
        }
        if !self.actions.allows(action) {
            return Err(Error::ActionNotPermitted(action));
        }
        Ok(())
    }

    async fn compose(&self, payload: ComposePayload) -> Result<()> {
        debug!("Opening compose from message {}", self.message.id);
        self.navigator
            .go_to(NavigationRequest::compose(payload))
            .await
    }
}
