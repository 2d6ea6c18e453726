//! UI state types
//!
//! State structures used by the App state machine.

/// Splash auto-advance duration in ticks (100ms each).
pub const SPLASH_TICKS: u32 = 20;

/// Splash fade-in duration in ticks.
pub const SPLASH_FADE_TICKS: u32 = 10;

/// Which screen is currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Logo splash, auto-advancing after [`SPLASH_TICKS`].
    Splash {
        /// Ticks elapsed since the splash appeared.
        ticks: u32,
    },

    /// Conversation list with the recent-contacts strip.
    Conversations,

    /// Per-conversation chat view.
    Chat {
        /// Target conversation id. May match no conversation when the
        /// chat was opened from a contact; sends are then silent no-ops.
        conversation_id: String,
        /// Counterpart number for the header when the id matches nothing.
        phone_number: String,
    },
}

/// Focus target on the conversations screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFocus {
    /// The vertical conversation list.
    Conversations,
    /// The horizontal recent-contacts strip.
    Contacts,
}

/// Selection state for the conversations screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSelection {
    /// Focused row set.
    pub focus: ListFocus,
    /// Selected index in the conversation list.
    pub conversation: usize,
    /// Selected index in the contacts strip.
    pub contact: usize,
}

impl Default for ListSelection {
    fn default() -> Self {
        Self { focus: ListFocus::Conversations, conversation: 0, contact: 0 }
    }
}
