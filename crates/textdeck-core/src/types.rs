//! Observable chat state types.
//!
//! These structures are the "view model" for the client: the conversation
//! list, per-conversation message threads, and the recent-contacts strip.
//! They deserialize directly from the seed data format.
//!
//! Contact ids and conversation ids are independent identifier spaces. The
//! seed data reuses values across both lists on purpose; nothing here
//! enforces referential integrity between them.

use serde::Deserialize;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The local user.
    Me,
    /// The conversation counterpart.
    Them,
}

/// A single message in a conversation.
///
/// Immutable once created; owned exclusively by its parent conversation's
/// message list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Message {
    /// Unique id, monotonic by creation order.
    pub id: String,
    /// Message body.
    pub text: String,
    /// Clock time label (`HH:MM`).
    pub time: String,
    /// Message author.
    pub sender: Sender,
}

/// An ordered thread of messages with one counterpart phone number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Unique conversation key.
    pub id: String,
    /// Counterpart phone number (digits, unformatted).
    pub phone_number: String,
    /// Display name. Falls back to the formatted phone number.
    #[serde(default)]
    pub name: Option<String>,
    /// Cached preview of the most recently appended message.
    #[serde(default)]
    pub last_message: Option<String>,
    /// Freshness label for the list view ("08:43", "Tue", "Just now").
    /// Not a timestamp.
    pub date: String,
    /// Avatar URI.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Messages in insertion order. Insertion order is chronological order.
    pub messages: Vec<Message>,
    /// Unread message count. Zero whenever the conversation is active and
    /// has been marked read.
    #[serde(default)]
    pub unread_count: u32,
}

impl Conversation {
    /// List title: the contact name, or the formatted phone number.
    pub fn title(&self) -> String {
        self.name.clone().unwrap_or_else(|| format_phone(&self.phone_number))
    }
}

/// An entry in the recent-contacts strip.
///
/// Independent of [`Conversation`]; a contact's id may coincide with a
/// conversation id without referring to it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Unique contact key.
    pub id: String,
    /// Contact phone number (digits, unformatted).
    pub phone_number: String,
    /// Display name. Falls back to the formatted phone number.
    #[serde(default)]
    pub name: Option<String>,
    /// Avatar URI.
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Contact {
    /// Strip title: the contact name, or the formatted phone number.
    pub fn title(&self) -> String {
        self.name.clone().unwrap_or_else(|| format_phone(&self.phone_number))
    }
}

/// Format a ten-digit phone number as `(XXX) XXX-XXXX`.
///
/// Non-digit characters are stripped first. Anything that is not exactly
/// ten digits after stripping is returned unchanged.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    match (digits.get(0..3), digits.get(3..6), digits.get(6..10)) {
        (Some(area), Some(prefix), Some(line)) if digits.len() == 10 => {
            format!("({area}) {prefix}-{line}")
        },
        _ => raw.to_string(),
    }
}
