//! Error types for seed data loading.
//!
//! Store mutations deliberately have no error type: the only failure mode
//! is a missing target id, which is a silent no-op at the mutation
//! boundary. Errors exist solely at construction time, where malformed
//! seed data must be rejected.

use thiserror::Error;

/// Errors raised while loading seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Seed JSON failed to deserialize.
    #[error("malformed seed data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two conversations share an id.
    #[error("duplicate conversation id in seed data: {0}")]
    DuplicateConversation(String),

    /// Two contacts share an id.
    #[error("duplicate contact id in seed data: {0}")]
    DuplicateContact(String),
}
