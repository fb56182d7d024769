//! Message data model.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Unique, stable identifier for a message.
///
/// Storage backends use opaque string ids; numeric ids are accepted on input
/// and kept in their decimal form.
///
/// Ids order numerically when both are decimal numbers and by string
/// otherwise, with numeric ids first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MessageId(pub String);

impl MessageId {
    /// Returns the raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, if it is a decimal number.
    #[must_use]
    pub fn as_number(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl Ord for MessageId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for MessageId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MessageId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for MessageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for MessageId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for MessageId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Number(n) => Self::from(n),
        })
    }
}

/// A stored email message as shown in the message view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier.
    #[serde(alias = "_id")]
    pub id: MessageId,
    /// Sender address.
    #[serde(default)]
    pub from: String,
    /// Recipient address. Absent on drafts saved before a recipient was chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Subject line.
    #[serde(default)]
    pub subject: String,
    /// Plain text body.
    #[serde(default)]
    pub body: String,
    /// When the message was sent.
    pub date: DateTime<Utc>,
    /// Whether the message has been read.
    #[serde(default)]
    pub read: bool,
}

impl Message {
    /// Creates an unread message dated now.
    #[must_use]
    pub fn new(
        id: impl Into<MessageId>,
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: Some(to.into()),
            subject: subject.into(),
            body: body.into(),
            date: Utc::now(),
            read: false,
        }
    }

    /// Sets the message date.
    #[must_use]
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_string_ids() {
        let a: MessageId = serde_json::from_str("3").unwrap();
        let b: MessageId = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "3");
    }

    #[test]
    fn test_id_ordering() {
        assert!(MessageId::from(2_u64) < MessageId::from(10_u64));
        assert!(MessageId::from("9") < MessageId::from("abc"));
        assert!(MessageId::from("abc") < MessageId::from("abd"));
        // Same value, different spelling: still a total order.
        assert!(MessageId::from("07") < MessageId::from("7"));
    }

    #[test]
    fn test_deserialize_legacy_id_field() {
        let json = r#"{
            "_id": "5648b50cc586cac4aed6836f",
            "from": "alice@example.com",
            "subject": "Lunch",
            "body": "Noon?",
            "date": "2015-11-15T16:45:32Z"
        }"#;
        let message: Message = serde_json::from_str(json).unwrap();
        assert_eq!(message.id.as_str(), "5648b50cc586cac4aed6836f");
        assert_eq!(message.to, None);
        assert!(!message.read);
    }

    #[test]
    fn test_missing_to_is_not_serialized() {
        let mut message = Message::new(1_u64, "x", "y", "Hi", "hello");
        message.to = None;
        let json = serde_json::to_string(&message).unwrap();
        assert!(!json.contains("\"to\""));
    }
}
