//! Reply and forward draft construction.
//!
//! Both builders are pure: the original message is only read.

use crate::model::{Draft, Message};

/// Subject prefix for replies.
pub const REPLY_PREFIX: &str = "Re: ";

/// Subject prefix for forwards.
pub const FORWARD_PREFIX: &str = "Fwd: ";

/// Divider line between the new text and the quoted original.
pub const QUOTE_DIVIDER: &str = "---------------------------------------";

/// Builds a reply addressed back to the original sender.
#[must_use]
pub fn build_reply(original: &Message) -> Draft {
    response(REPLY_PREFIX, original)
}

/// Builds a forward with no recipient; the user picks one in compose.
#[must_use]
pub fn build_forward(original: &Message) -> Draft {
    Draft {
        to: None,
        ..response(FORWARD_PREFIX, original)
    }
}

/// Renders the original message as a quoted block for a response body.
///
/// Header values and the body are copied verbatim.
#[must_use]
pub fn quote(original: &Message) -> String {
    format!(
        "\n\n\n\n{QUOTE_DIVIDER}\nOriginal message:\nFrom: {}\nDate: {}\nSubject: {}\n\n{}",
        original.from,
        original.date.to_rfc3339(),
        original.subject,
        original.body,
    )
}

fn response(prefix: &str, original: &Message) -> Draft {
    Draft {
        from: original.to.clone(),
        to: Some(original.from.clone()),
        subject: format!("{prefix}{}", original.subject),
        body: quote(original),
    }
}
