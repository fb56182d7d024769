//! Message ordering and the post-delete navigation target.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::{Message, MessageId};
use crate::{Error, Result};

/// Message field the list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Sent date.
    #[default]
    Date,
    /// Sender address.
    From,
    /// Recipient address.
    To,
    /// Subject line.
    Subject,
    /// Read state (unread first when ascending).
    Read,
    /// Message id.
    Id,
}

impl SortKey {
    /// Configuration name of the key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::From => "from",
            Self::To => "to",
            Self::Subject => "subject",
            Self::Read => "read",
            Self::Id => "id",
        }
    }

    fn compare(self, a: &Message, b: &Message) -> Ordering {
        match self {
            Self::Date => a.date.cmp(&b.date),
            Self::From => a.from.cmp(&b.from),
            Self::To => a.to.cmp(&b.to),
            Self::Subject => a.subject.cmp(&b.subject),
            Self::Read => a.read.cmp(&b.read),
            Self::Id => a.id.cmp(&b.id),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

/// Key and direction used to order a folder's message list.
///
/// Written in configuration as an optional sign and a key name:
/// `"+date"`, `"-subject"`, `"from"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SortOrder {
    /// Field to compare.
    pub key: SortKey,
    /// Direction of the comparison.
    pub direction: SortDirection,
}

impl SortOrder {
    /// Creates a sort order.
    #[must_use]
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Ascending order on `key`.
    #[must_use]
    pub const fn ascending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    /// Descending order on `key`.
    #[must_use]
    pub const fn descending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Descending)
    }

    /// Compares two messages under this order.
    #[must_use]
    pub fn compare(&self, a: &Message, b: &Message) -> Ordering {
        let ordering = self.key.compare(a, b);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.direction {
            SortDirection::Ascending => '+',
            SortDirection::Descending => '-',
        };
        write!(f, "{sign}{}", self.key.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (direction, name) = if let Some(rest) = trimmed.strip_prefix('-') {
            (SortDirection::Descending, rest)
        } else if let Some(rest) = trimmed.strip_prefix('+') {
            (SortDirection::Ascending, rest)
        } else {
            (SortDirection::Ascending, trimmed)
        };

        let key = match name {
            "date" => SortKey::Date,
            "from" => SortKey::From,
            "to" => SortKey::To,
            "subject" => SortKey::Subject,
            "read" => SortKey::Read,
            "id" | "_id" => SortKey::Id,
            _ => return Err(Error::InvalidSortOrder(s.to_string())),
        };

        Ok(Self { key, direction })
    }
}

impl Serialize for SortOrder {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SortOrder {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Orders messages for display. Ties keep their input order.
#[must_use]
pub fn sort_messages(messages: &[Message], order: SortOrder) -> Vec<&Message> {
    let mut sorted: Vec<&Message> = messages.iter().collect();
    sorted.sort_by(|a, b| order.compare(a, b));
    sorted
}

/// Picks the message to show once `target` is removed from the list.
///
/// The next message in sort order wins; the previous one is used when the
/// target is last. Returns `None` when there is no sibling. An unknown
/// target behaves as if it sat just before the first message.
#[must_use]
pub fn resolve_proximal(
    messages: &[Message],
    order: SortOrder,
    target: &MessageId,
) -> Option<MessageId> {
    let sorted = sort_messages(messages, order);
    let candidate = match sorted.iter().position(|m| &m.id == target) {
        Some(idx) if idx + 1 < sorted.len() => Some(idx + 1),
        Some(idx) => idx.checked_sub(1),
        None if sorted.is_empty() => None,
        None => Some(0),
    };
    candidate.map(|idx| sorted[idx].id.clone())
}
