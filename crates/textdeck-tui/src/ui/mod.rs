//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! drawing into the frame.

mod chat;
mod conversations;
mod input;
mod splash;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::{App, Screen};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen() {
        Screen::Splash { ticks } => splash::render(frame, *ticks, frame.area()),
        Screen::Conversations => render_conversations(frame, app),
        Screen::Chat { conversation_id, phone_number } => {
            render_chat(frame, app, conversation_id, phone_number);
        },
    }
}

/// Render the conversation list screen (contacts strip + list + status).
fn render_conversations(frame: &mut Frame, app: &App) {
    const MAIN_AREA_MIN_HEIGHT: u16 = 3;
    const CONTACTS_HEIGHT: u16 = 4;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CONTACTS_HEIGHT),
            Constraint::Min(MAIN_AREA_MIN_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [contacts_area, list_area, status_area] = chunks.as_ref() else {
        return;
    };

    conversations::render_contacts(frame, app, *contacts_area);
    conversations::render_list(frame, app, *list_area);
    status::render(frame, app, *status_area);
}

/// Render the chat screen (messages + input + status).
fn render_chat(frame: &mut Frame, app: &App, conversation_id: &str, phone_number: &str) {
    const MESSAGES_MIN_HEIGHT: u16 = 3;
    const INPUT_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(MESSAGES_MIN_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [messages_area, input_area, status_area] = chunks.as_ref() else {
        return;
    };

    chat::render(frame, app, conversation_id, phone_number, *messages_area);
    input::render(frame, app, *input_area);
    status::render(frame, app, *status_area);
}
