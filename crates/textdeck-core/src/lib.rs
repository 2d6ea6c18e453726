//! In-memory conversation store for the textdeck mock SMS client.
//!
//! This crate owns all chat-domain state and invariants: conversations,
//! contacts, message append, read/unread tracking, and active-conversation
//! tracking. Everything else in the application (rendering, navigation,
//! animation) is presentation glue living in `textdeck-tui`.
//!
//! There is no network layer and no persistence. State is built once from
//! embedded seed data and mutated only through the operations on
//! [`ChatStore`]; it is destroyed on process exit.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod clock;
pub mod error;
pub mod seed;
pub mod store;
pub mod types;

mod ids;

pub use clock::{Clock, SystemClock};
pub use error::SeedError;
pub use seed::Seed;
pub use store::ChatStore;
pub use types::{Contact, Conversation, Message, Sender, format_phone};
