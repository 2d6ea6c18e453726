//! UI events
//!
//! Events fed into the App state machine from terminal input and the
//! simulated incoming-message feed.

/// Key input events, decoupled from the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Character input.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Tab key.
    Tab,
    /// Escape key.
    Esc,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
}

/// Events processed by the App state machine.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Periodic tick (splash timing, animations).
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Simulated inbound message.
    Incoming {
        /// Target conversation id.
        conversation_id: String,
        /// Message body.
        text: String,
    },
}
