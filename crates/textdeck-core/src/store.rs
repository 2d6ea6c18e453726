//! The conversation store.
//!
//! Single source of truth for chat state. All mutations are synchronous
//! and applied to one in-memory structure owned by a single caller; there
//! are no concurrent writers and no failure modes beyond "target id not
//! found", which is always a silent no-op.
//!
//! Per-conversation read state forms a small machine over `unread_count`:
//! `Read (0)` moves to `Unread (n + 1)` on an inbound message while the
//! conversation is not active, and back to `Read (0)` on
//! [`ChatStore::mark_conversation_as_read`]. Outbound messages never touch
//! the counter.

use tracing::debug;

use crate::{
    clock::{Clock, SystemClock},
    error::SeedError,
    ids::IdGenerator,
    seed::{self, Seed},
    types::{Contact, Conversation, Message, Sender},
};

/// Freshness label applied to a conversation on every append.
const JUST_NOW: &str = "Just now";

/// In-memory mapping of conversation and contact records.
///
/// Generic over [`Clock`] so message time labels are deterministic under
/// test; production code uses [`SystemClock`].
#[derive(Debug, Clone)]
pub struct ChatStore<C = SystemClock> {
    conversations: Vec<Conversation>,
    contacts: Vec<Contact>,
    active_conversation_id: Option<String>,
    ids: IdGenerator,
    clock: C,
}

impl ChatStore<SystemClock> {
    /// Build a store from the embedded seed data with the system clock.
    pub fn from_seed() -> Result<Self, SeedError> {
        Ok(Self::with_clock(seed::load()?, SystemClock))
    }
}

impl<C: Clock> ChatStore<C> {
    /// Build a store from seed content and an explicit clock.
    pub fn with_clock(seed: Seed, clock: C) -> Self {
        let ids = IdGenerator::seeded_from(
            seed.conversations
                .iter()
                .flat_map(|conversation| &conversation.messages)
                .map(|message| message.id.as_str()),
        );

        Self {
            conversations: seed.conversations,
            contacts: seed.contacts,
            active_conversation_id: None,
            ids,
            clock,
        }
    }

    /// Conversations in display order.
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Recent contacts in display order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Look up a conversation by id.
    pub fn conversation(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|conversation| conversation.id == id)
    }

    /// Id of the conversation currently open in the UI, if any.
    pub fn active_conversation_id(&self) -> Option<&str> {
        self.active_conversation_id.as_deref()
    }

    /// Total unread count across all conversations.
    pub fn total_unread(&self) -> u32 {
        self.conversations.iter().map(|conversation| conversation.unread_count).sum()
    }

    /// Mark a conversation as the active one, or clear the active marker.
    ///
    /// While a conversation is active, inbound messages targeting it do not
    /// increment its unread count. The id is not validated; an id matching
    /// no conversation simply suppresses nothing.
    pub fn set_active_conversation(&mut self, id: Option<&str>) {
        self.active_conversation_id = id.map(str::to_string);
    }

    /// Append an outbound message.
    ///
    /// Silent no-op when `conversation_id` matches no conversation. On
    /// success the message is tagged [`Sender::Me`] and the conversation
    /// preview and date label are refreshed. Never touches `unread_count`.
    pub fn send_message(&mut self, conversation_id: &str, text: &str) {
        self.append_message(conversation_id, text, Sender::Me);
    }

    /// Append an inbound message.
    ///
    /// Silent no-op when `conversation_id` matches no conversation. On
    /// success the message is tagged [`Sender::Them`], and `unread_count`
    /// is incremented by one unless the target is the active conversation.
    pub fn receive_message(&mut self, conversation_id: &str, text: &str) {
        let is_active = self.active_conversation_id.as_deref() == Some(conversation_id);
        if let Some(conversation) = self.append_message(conversation_id, text, Sender::Them) {
            if !is_active {
                conversation.unread_count = conversation.unread_count.saturating_add(1);
            }
        }
    }

    /// Reset a conversation's unread count to zero.
    ///
    /// Silent no-op when `conversation_id` matches no conversation.
    pub fn mark_conversation_as_read(&mut self, conversation_id: &str) {
        match self.conversations.iter_mut().find(|c| c.id == conversation_id) {
            Some(conversation) => conversation.unread_count = 0,
            None => debug!(conversation_id, "mark-as-read target not found"),
        }
    }

    /// Append a message and refresh the conversation preview.
    ///
    /// Returns the mutated conversation, or `None` when the id matches
    /// nothing. The id generator is only advanced on a successful append,
    /// so a miss leaves the store byte-for-byte unchanged.
    fn append_message(
        &mut self,
        conversation_id: &str,
        text: &str,
        sender: Sender,
    ) -> Option<&mut Conversation> {
        let Some(index) = self.conversations.iter().position(|c| c.id == conversation_id) else {
            debug!(conversation_id, "message target not found; dropping");
            return None;
        };

        let id = self.ids.next_id();
        let time = self.clock.time_label();
        let conversation = self.conversations.get_mut(index)?;

        conversation.messages.push(Message { id, text: text.to_string(), time, sender });
        conversation.last_message = Some(text.to_string());
        conversation.date = JUST_NOW.to_string();

        Some(conversation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy)]
    struct FixedClock;

    impl Clock for FixedClock {
        fn time_label(&self) -> String {
            "10:42".to_string()
        }
    }

    fn store() -> ChatStore<FixedClock> {
        ChatStore::with_clock(seed::load().unwrap(), FixedClock)
    }

    #[test]
    fn send_message_stamps_clock_label_and_sender() {
        let mut store = store();
        store.send_message("1", "on my way");

        let conversation = store.conversation("1").unwrap();
        let message = conversation.messages.last().unwrap();
        assert_eq!(message.time, "10:42");
        assert_eq!(message.sender, Sender::Me);
        assert_eq!(conversation.date, "Just now");
    }

    #[test]
    fn appended_message_ids_are_unique_and_increasing() {
        let mut store = store();
        store.send_message("1", "a");
        store.send_message("1", "b");
        store.receive_message("2", "c");

        // Seed messages all carry id "1", so the counter starts at 2.
        let first = &store.conversation("1").unwrap().messages[1];
        let second = &store.conversation("1").unwrap().messages[2];
        let third = &store.conversation("2").unwrap().messages[1];
        assert_eq!(first.id, "2");
        assert_eq!(second.id, "3");
        assert_eq!(third.id, "4");
    }

    #[test]
    fn miss_does_not_burn_an_id() {
        let mut store = store();
        store.send_message("no-such-thread", "dropped");
        store.send_message("1", "kept");

        assert_eq!(store.conversation("1").unwrap().messages.last().unwrap().id, "2");
    }

    #[test]
    fn total_unread_sums_all_conversations() {
        let mut store = store();
        store.receive_message("1", "x");
        store.receive_message("2", "y");
        store.receive_message("2", "z");

        assert_eq!(store.total_unread(), 3);
    }

    #[test]
    fn active_marker_accepts_unknown_ids() {
        let mut store = store();
        store.set_active_conversation(Some("ghost"));
        assert_eq!(store.active_conversation_id(), Some("ghost"));

        store.set_active_conversation(None);
        assert_eq!(store.active_conversation_id(), None);
    }
}
