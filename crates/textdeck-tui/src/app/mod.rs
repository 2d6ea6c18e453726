//! UI state machine
//!
//! Pure state machine that processes terminal and feed events, producing
//! actions for the runtime to execute. Completely decoupled from I/O.
//!
//! # Architecture
//!
//! The App owns the [`ChatStore`] and manages UI-specific state: the
//! current screen, list selection, and the input buffer. All store
//! mutations happen inside [`App::handle`], synchronously, so there is one
//! logical writer by construction.

mod action;
mod event;
mod state;

pub use action::AppAction;
pub use event::{AppEvent, KeyInput};
pub use state::{ListFocus, ListSelection, SPLASH_FADE_TICKS, SPLASH_TICKS, Screen};
use textdeck_core::ChatStore;

/// UI state machine.
///
/// Translates events into store mutations and render requests. Pure and
/// testable: no terminal, clock, or channel access.
#[derive(Debug)]
pub struct App {
    /// Chat state, the single source of truth.
    store: ChatStore,
    /// Current screen.
    screen: Screen,
    /// Selection state for the conversations screen.
    selection: ListSelection,
    /// Input line buffer (chat screen).
    input_buffer: String,
    /// Cursor position in input buffer.
    input_cursor: usize,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
}

impl App {
    /// Create a new App showing the splash screen.
    pub fn new(store: ChatStore) -> Self {
        Self {
            store,
            screen: Screen::Splash { ticks: 0 },
            selection: ListSelection::default(),
            input_buffer: String::new(),
            input_cursor: 0,
            terminal_size: (80, 24),
        }
    }

    /// Create a new App that starts on the conversation list.
    pub fn skipping_splash(store: ChatStore) -> Self {
        let mut app = Self::new(store);
        app.screen = Screen::Conversations;
        app
    }

    /// Process an event and return actions for the runtime.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Tick => self.handle_tick(),
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::Incoming { conversation_id, text } => {
                // Unread suppression for the open chat happens in the
                // store: the active conversation never accrues unread.
                self.store.receive_message(&conversation_id, &text);
                vec![AppAction::Render]
            },
        }
    }

    /// Advance splash timing. Ticks are inert on other screens.
    fn handle_tick(&mut self) -> Vec<AppAction> {
        let Screen::Splash { ticks } = &mut self.screen else {
            return vec![];
        };

        *ticks = ticks.saturating_add(1);
        if *ticks >= SPLASH_TICKS {
            self.screen = Screen::Conversations;
        }
        vec![AppAction::Render]
    }

    /// Handle keyboard input for the current screen.
    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match self.screen {
            // Any key skips the splash.
            Screen::Splash { .. } => {
                self.screen = Screen::Conversations;
                vec![AppAction::Render]
            },
            Screen::Conversations => self.handle_list_key(key),
            Screen::Chat { .. } => self.handle_chat_key(key),
        }
    }

    /// Keyboard handling for the conversations screen.
    fn handle_list_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Up => {
                self.selection.conversation = self.selection.conversation.saturating_sub(1);
                vec![AppAction::Render]
            },
            KeyInput::Down => {
                let last = self.store.conversations().len().saturating_sub(1);
                self.selection.conversation = self.selection.conversation.saturating_add(1).min(last);
                vec![AppAction::Render]
            },
            KeyInput::Left if self.selection.focus == ListFocus::Contacts => {
                self.selection.contact = self.selection.contact.saturating_sub(1);
                vec![AppAction::Render]
            },
            KeyInput::Right if self.selection.focus == ListFocus::Contacts => {
                let last = self.store.contacts().len().saturating_sub(1);
                self.selection.contact = self.selection.contact.saturating_add(1).min(last);
                vec![AppAction::Render]
            },
            KeyInput::Tab => {
                self.selection.focus = match self.selection.focus {
                    ListFocus::Conversations => ListFocus::Contacts,
                    ListFocus::Contacts => ListFocus::Conversations,
                };
                vec![AppAction::Render]
            },
            KeyInput::Enter => self.open_selected(),
            KeyInput::Esc => vec![AppAction::Quit],
            _ => vec![],
        }
    }

    /// Open the chat for the current selection.
    ///
    /// Contact ids flow into conversation-id space here: selecting a
    /// recent contact opens a chat keyed by the contact id, whether or not
    /// a conversation carries it.
    fn open_selected(&mut self) -> Vec<AppAction> {
        let target = match self.selection.focus {
            ListFocus::Conversations => self
                .store
                .conversations()
                .get(self.selection.conversation)
                .map(|c| (c.id.clone(), c.phone_number.clone())),
            ListFocus::Contacts => self
                .store
                .contacts()
                .get(self.selection.contact)
                .map(|c| (c.id.clone(), c.phone_number.clone())),
        };

        let Some((conversation_id, phone_number)) = target else {
            return vec![];
        };

        self.store.set_active_conversation(Some(conversation_id.as_str()));
        self.store.mark_conversation_as_read(&conversation_id);
        self.input_buffer.clear();
        self.input_cursor = 0;
        self.screen = Screen::Chat { conversation_id, phone_number };
        vec![AppAction::Render]
    }

    /// Keyboard handling for the chat screen.
    fn handle_chat_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Char(c) => {
                self.input_buffer.insert(self.input_cursor, c);
                self.input_cursor = self.input_cursor.saturating_add(c.len_utf8());
                vec![AppAction::Render]
            },
            KeyInput::Backspace => {
                if self.input_cursor > 0 {
                    let prev = previous_char_boundary(&self.input_buffer, self.input_cursor);
                    self.input_buffer.remove(prev);
                    self.input_cursor = prev;
                }
                vec![AppAction::Render]
            },
            KeyInput::Delete => {
                if self.input_cursor < self.input_buffer.len() {
                    self.input_buffer.remove(self.input_cursor);
                }
                vec![AppAction::Render]
            },
            KeyInput::Left => {
                if self.input_cursor > 0 {
                    self.input_cursor = previous_char_boundary(&self.input_buffer, self.input_cursor);
                }
                vec![AppAction::Render]
            },
            KeyInput::Right => {
                if self.input_cursor < self.input_buffer.len() {
                    self.input_cursor = next_char_boundary(&self.input_buffer, self.input_cursor);
                }
                vec![AppAction::Render]
            },
            KeyInput::Home => {
                self.input_cursor = 0;
                vec![AppAction::Render]
            },
            KeyInput::End => {
                self.input_cursor = self.input_buffer.len();
                vec![AppAction::Render]
            },
            KeyInput::Enter => self.send_input(),
            KeyInput::Esc => self.close_chat(),
            KeyInput::Tab | KeyInput::Up | KeyInput::Down => vec![],
        }
    }

    /// Send the input buffer to the open conversation.
    fn send_input(&mut self) -> Vec<AppAction> {
        let Screen::Chat { conversation_id, .. } = &self.screen else {
            return vec![];
        };

        let text = std::mem::take(&mut self.input_buffer);
        self.input_cursor = 0;

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return vec![];
        }

        let conversation_id = conversation_id.clone();
        self.store.send_message(&conversation_id, trimmed);
        vec![AppAction::Render]
    }

    /// Close the chat and return to the conversation list.
    fn close_chat(&mut self) -> Vec<AppAction> {
        self.store.set_active_conversation(None);
        self.input_buffer.clear();
        self.input_cursor = 0;
        self.screen = Screen::Conversations;
        vec![AppAction::Render]
    }

    /// Chat state.
    pub fn store(&self) -> &ChatStore {
        &self.store
    }

    /// Current screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Selection state for the conversations screen.
    pub fn selection(&self) -> ListSelection {
        self.selection
    }

    /// Input buffer contents.
    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    /// Cursor position in input buffer.
    pub fn input_cursor(&self) -> usize {
        self.input_cursor
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }
}

/// Largest char boundary strictly before `index`.
fn previous_char_boundary(s: &str, index: usize) -> usize {
    let mut i = index.saturating_sub(1);
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Smallest char boundary strictly after `index`.
fn next_char_boundary(s: &str, index: usize) -> usize {
    let mut i = index.saturating_add(1);
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i.min(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listed_app() -> App {
        App::skipping_splash(ChatStore::from_seed().unwrap())
    }

    fn type_line(app: &mut App, line: &str) {
        for c in line.chars() {
            let _ = app.handle(AppEvent::Key(KeyInput::Char(c)));
        }
    }

    #[test]
    fn splash_advances_after_timeout() {
        let mut app = App::new(ChatStore::from_seed().unwrap());
        for _ in 0..SPLASH_TICKS {
            let _ = app.handle(AppEvent::Tick);
        }
        assert_eq!(app.screen, Screen::Conversations);
    }

    #[test]
    fn any_key_skips_splash() {
        let mut app = App::new(ChatStore::from_seed().unwrap());
        let _ = app.handle(AppEvent::Key(KeyInput::Char('x')));
        assert_eq!(app.screen, Screen::Conversations);
    }

    #[test]
    fn tick_is_inert_outside_splash() {
        let mut app = listed_app();
        let actions = app.handle(AppEvent::Tick);
        assert!(actions.is_empty());
        assert_eq!(app.screen, Screen::Conversations);
    }

    #[test]
    fn enter_opens_selected_conversation_active_and_read() {
        let mut app = listed_app();
        let _ = app.handle(AppEvent::Incoming {
            conversation_id: "2".into(),
            text: "you around?".into(),
        });
        assert_eq!(app.store.conversation("2").unwrap().unread_count, 1);

        let _ = app.handle(AppEvent::Key(KeyInput::Down));
        let _ = app.handle(AppEvent::Key(KeyInput::Enter));

        assert!(matches!(&app.screen, Screen::Chat { conversation_id, .. } if conversation_id == "2"));
        assert_eq!(app.store.active_conversation_id(), Some("2"));
        assert_eq!(app.store.conversation("2").unwrap().unread_count, 0);
    }

    #[test]
    fn esc_in_chat_returns_to_list_and_clears_active() {
        let mut app = listed_app();
        let _ = app.handle(AppEvent::Key(KeyInput::Enter));
        assert_eq!(app.store.active_conversation_id(), Some("1"));

        let _ = app.handle(AppEvent::Key(KeyInput::Esc));

        assert_eq!(app.screen, Screen::Conversations);
        assert_eq!(app.store.active_conversation_id(), None);
    }

    #[test]
    fn esc_on_list_quits() {
        let mut app = listed_app();
        let actions = app.handle(AppEvent::Key(KeyInput::Esc));
        assert_eq!(actions, vec![AppAction::Quit]);
    }

    #[test]
    fn typing_and_enter_sends_trimmed_message() {
        let mut app = listed_app();
        let _ = app.handle(AppEvent::Key(KeyInput::Enter));

        type_line(&mut app, "  hello there  ");
        let _ = app.handle(AppEvent::Key(KeyInput::Enter));

        let conversation = app.store.conversation("1").unwrap();
        assert_eq!(conversation.messages.len(), 2);
        assert_eq!(conversation.messages.last().unwrap().text, "hello there");
        assert_eq!(conversation.last_message.as_deref(), Some("hello there"));
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.input_cursor, 0);
    }

    #[test]
    fn blank_input_sends_nothing() {
        let mut app = listed_app();
        let _ = app.handle(AppEvent::Key(KeyInput::Enter));

        type_line(&mut app, "   ");
        let _ = app.handle(AppEvent::Key(KeyInput::Enter));

        assert_eq!(app.store.conversation("1").unwrap().messages.len(), 1);
    }

    #[test]
    fn incoming_while_chat_open_stays_read() {
        let mut app = listed_app();
        let _ = app.handle(AppEvent::Key(KeyInput::Enter));

        let _ = app.handle(AppEvent::Incoming {
            conversation_id: "1".into(),
            text: "calling you now".into(),
        });

        let conversation = app.store.conversation("1").unwrap();
        assert_eq!(conversation.unread_count, 0);
        assert_eq!(conversation.messages.len(), 2);
    }

    #[test]
    fn incoming_for_other_conversation_accrues_unread() {
        let mut app = listed_app();
        let _ = app.handle(AppEvent::Key(KeyInput::Enter));

        let _ = app.handle(AppEvent::Incoming { conversation_id: "6".into(), text: "hey".into() });

        assert_eq!(app.store.conversation("6").unwrap().unread_count, 1);
    }

    #[test]
    fn tab_focuses_contacts_and_enter_opens_by_contact_id() {
        let mut app = listed_app();
        let _ = app.handle(AppEvent::Key(KeyInput::Tab));
        let _ = app.handle(AppEvent::Key(KeyInput::Right));
        let _ = app.handle(AppEvent::Key(KeyInput::Right));
        let _ = app.handle(AppEvent::Key(KeyInput::Enter));

        // Contact "3" opens the chat keyed "3": the existing conversation
        // with a different phone number. Identifier spaces stay separate.
        assert!(matches!(&app.screen, Screen::Chat { conversation_id, .. } if conversation_id == "3"));
        assert_eq!(app.store.active_conversation_id(), Some("3"));
    }

    #[test]
    fn selection_clamps_at_list_edges() {
        let mut app = listed_app();
        let _ = app.handle(AppEvent::Key(KeyInput::Up));
        assert_eq!(app.selection.conversation, 0);

        for _ in 0..20 {
            let _ = app.handle(AppEvent::Key(KeyInput::Down));
        }
        assert_eq!(app.selection.conversation, app.store.conversations().len() - 1);
    }

    #[test]
    fn backspace_handles_multibyte_input() {
        let mut app = listed_app();
        let _ = app.handle(AppEvent::Key(KeyInput::Enter));

        type_line(&mut app, "héllo");
        let _ = app.handle(AppEvent::Key(KeyInput::Backspace));
        let _ = app.handle(AppEvent::Key(KeyInput::Backspace));

        assert_eq!(app.input_buffer, "hé");
        assert_eq!(app.input_cursor, app.input_buffer.len());
    }
}
