//! UI actions
//!
//! Actions produced by the App state machine for the runtime to execute.
//! With no network layer, only terminal effects remain.

/// Actions produced by the App state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,
}
