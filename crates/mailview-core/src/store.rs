//! In-memory message store.

use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use crate::model::{Folder, Message, MessageId};
use crate::service::MessageStore;
use crate::{Error, Result};

/// A folder and its messages, as stored in a mailbox document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mailbox {
    /// The folder and its action policy.
    pub folder: Folder,
    /// Messages in storage order.
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Mailbox {
    /// Parses a mailbox document from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a folder action is unknown.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a mailbox document from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path).await?;
        Self::from_json(&contents)
    }
}

/// Message store backed by a vector, preserving insertion order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    messages: Mutex<Vec<Message>>,
}

impl InMemoryStore {
    /// Creates a store holding `messages`.
    #[must_use]
    pub const fn new(messages: Vec<Message>) -> Self {
        Self {
            messages: Mutex::new(messages),
        }
    }

    /// Snapshot of all stored messages.
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.lock().map(|m| m.clone()).unwrap_or_default()
    }

    /// Number of stored messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().map_or(0, |m| m.len())
    }

    /// Returns true if the store holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Message>>> {
        self.messages
            .lock()
            .map_err(|_| Error::Storage("message store lock poisoned".to_string()))
    }

    fn find(&self, id: &MessageId) -> Result<Message> {
        self.lock()?
            .iter()
            .find(|m| &m.id == id)
            .cloned()
            .ok_or_else(|| Error::MessageNotFound(id.clone()))
    }

    fn upsert(&self, message: &Message) -> Result<()> {
        let mut messages = self.lock()?;
        if let Some(slot) = messages.iter_mut().find(|m| m.id == message.id) {
            slot.clone_from(message);
        } else {
            messages.push(message.clone());
        }
        Ok(())
    }

    fn delete(&self, message: &Message) -> Result<()> {
        let mut messages = self.lock()?;
        let before = messages.len();
        messages.retain(|m| m.id != message.id);
        if messages.len() == before {
            return Err(Error::MessageNotFound(message.id.clone()));
        }
        Ok(())
    }
}

impl From<Mailbox> for InMemoryStore {
    fn from(mailbox: Mailbox) -> Self {
        Self::new(mailbox.messages)
    }
}

impl MessageStore for InMemoryStore {
    async fn get(&self, id: &MessageId) -> Result<Message> {
        self.find(id)
    }

    async fn put(&self, message: &Message) -> Result<()> {
        self.upsert(message)
    }

    async fn remove(&self, message: &Message) -> Result<()> {
        self.delete(message)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store() -> InMemoryStore {
        InMemoryStore::new(vec![
            Message::new(1_u64, "a", "b", "one", ""),
            Message::new(2_u64, "a", "b", "two", ""),
        ])
    }

    #[test]
    fn test_get_put_remove() {
        tokio_test::block_on(async {
            let store = store();
            let mut message = store.get(&2_u64.into()).await.unwrap();
            message.read = true;
            store.put(&message).await.unwrap();
            assert!(store.get(&2_u64.into()).await.unwrap().read);
            assert_eq!(store.len(), 2);

            store.remove(&message).await.unwrap();
            assert!(matches!(
                store.get(&2_u64.into()).await,
                Err(Error::MessageNotFound(_))
            ));
            assert_eq!(store.len(), 1);
        });
    }

    #[test]
    fn test_put_appends_new_messages() {
        tokio_test::block_on(async {
            let store = store();
            store
                .put(&Message::new(3_u64, "a", "b", "three", ""))
                .await
                .unwrap();
            let ids: Vec<_> = store.messages().into_iter().map(|m| m.id).collect();
            assert_eq!(ids, vec![MessageId::from(1_u64), MessageId::from(2_u64), MessageId::from(3_u64)]);
        });
    }

    #[test]
    fn test_remove_missing_message() {
        let store = store();
        let ghost = Message::new(9_u64, "a", "b", "ghost", "");
        let result = tokio_test::block_on(store.remove(&ghost));
        assert!(matches!(result, Err(Error::MessageNotFound(id)) if id.as_str() == "9"));
    }

    #[test]
    fn test_mailbox_document() {
        let json = r#"{
            "folder": {"name": "Drafts", "actions": ["edit", "delete"]},
            "messages": [
                {"_id": "d1", "from": "me", "subject": "draft", "body": "", "date": "2024-01-01T00:00:00Z"}
            ]
        }"#;
        let mailbox = Mailbox::from_json(json).unwrap();
        assert_eq!(mailbox.folder, Folder::drafts());
        let store = InMemoryStore::from(mailbox);
        assert_eq!(store.len(), 1);
    }
}
