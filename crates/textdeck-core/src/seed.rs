//! Static seed data.
//!
//! Stands in for a real backend: the initial conversation and contact
//! lists ship as embedded JSON and are deserialized once at store
//! construction. The content intentionally carries the quirks of the mock
//! dataset, including a phone number shared by two conversations and
//! contact ids that overlap conversation ids without referring to them.

use std::collections::HashSet;

use serde::Deserialize;

use crate::{
    error::SeedError,
    types::{Contact, Conversation},
};

const SEED_JSON: &str = include_str!("seed.json");

/// Initial store content.
#[derive(Debug, Clone, Deserialize)]
pub struct Seed {
    /// Conversation list in display order.
    pub conversations: Vec<Conversation>,
    /// Recent contacts in display order.
    pub contacts: Vec<Contact>,
}

/// Load and validate the embedded seed data.
pub fn load() -> Result<Seed, SeedError> {
    parse(SEED_JSON)
}

fn parse(json: &str) -> Result<Seed, SeedError> {
    let seed: Seed = serde_json::from_str(json)?;

    let mut conversation_ids = HashSet::new();
    for conversation in &seed.conversations {
        if !conversation_ids.insert(conversation.id.as_str()) {
            return Err(SeedError::DuplicateConversation(conversation.id.clone()));
        }
    }

    let mut contact_ids = HashSet::new();
    for contact in &seed.contacts {
        if !contact_ids.insert(contact.id.as_str()) {
            return Err(SeedError::DuplicateContact(contact.id.clone()));
        }
    }

    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_seed_loads() {
        let seed = load().unwrap();
        assert_eq!(seed.conversations.len(), 8);
        assert_eq!(seed.contacts.len(), 4);
    }

    #[test]
    fn seed_keeps_contact_and_conversation_id_spaces_apart() {
        // Contact "3" and conversation "3" coexist with different numbers.
        // That overlap is part of the dataset, not an error.
        let seed = load().unwrap();
        let contact = seed.contacts.iter().find(|c| c.id == "3").unwrap();
        let conversation = seed.conversations.iter().find(|c| c.id == "3").unwrap();
        assert_ne!(contact.phone_number, conversation.phone_number);
    }

    #[test]
    fn duplicate_conversation_id_is_rejected() {
        let json = r#"{
            "contacts": [],
            "conversations": [
                {"id": "1", "phoneNumber": "1", "date": "Tue", "messages": []},
                {"id": "1", "phoneNumber": "2", "date": "Tue", "messages": []}
            ]
        }"#;
        assert!(matches!(parse(json), Err(SeedError::DuplicateConversation(id)) if id == "1"));
    }

    #[test]
    fn duplicate_contact_id_is_rejected() {
        let json = r#"{
            "contacts": [
                {"id": "7", "phoneNumber": "1"},
                {"id": "7", "phoneNumber": "2"}
            ],
            "conversations": []
        }"#;
        assert!(matches!(parse(json), Err(SeedError::DuplicateContact(id)) if id == "7"));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(parse("{not json"), Err(SeedError::Parse(_))));
    }
}
