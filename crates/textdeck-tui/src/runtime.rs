//! Async runtime
//!
//! Event loop that drives terminal I/O for the App state machine. Uses
//! tokio::select! to handle terminal events, the periodic tick, and the
//! optional demo feed concurrently. All store mutations still happen
//! synchronously inside [`App::handle`] on this single loop.

use std::io::{self, Stdout, stdout};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use textdeck_core::{ChatStore, SeedError};
use thiserror::Error;

use crate::{
    app::{App, AppAction, AppEvent, KeyInput},
    feed::{self, FeedHandle},
    ui,
};

/// Tick period driving splash timing and animations.
const TICK_MILLIS: u64 = 100;

/// Runtime errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Seed data failed to load.
    #[error("seed data error: {0}")]
    Seed(#[from] SeedError),
}

/// Async runtime for the TUI.
///
/// Manages terminal setup/teardown, the main event loop, and the optional
/// demo feed.
pub struct Runtime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    app: App,
    demo: bool,
}

impl Runtime {
    /// Create a new runtime starting on the splash screen.
    pub fn new() -> Result<Self, RuntimeError> {
        Self::create(false, false)
    }

    /// Create a runtime with the simulated incoming-message feed enabled.
    pub fn with_demo_feed() -> Result<Self, RuntimeError> {
        Self::create(true, false)
    }

    /// Create a runtime, optionally skipping the splash screen.
    pub fn with_options(demo: bool, skip_splash: bool) -> Result<Self, RuntimeError> {
        Self::create(demo, skip_splash)
    }

    fn create(demo: bool, skip_splash: bool) -> Result<Self, RuntimeError> {
        let store = ChatStore::from_seed()?;
        let app = if skip_splash { App::skipping_splash(store) } else { App::new(store) };

        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal, app, demo })
    }

    /// Run the main event loop.
    pub async fn run(mut self) -> Result<(), RuntimeError> {
        tracing::info!(demo = self.demo, "starting event loop");
        self.render()?;

        let mut event_stream = EventStream::new();
        let mut tick_interval =
            tokio::time::interval(std::time::Duration::from_millis(TICK_MILLIS));

        let mut feed = if self.demo {
            let ids = self
                .app
                .store()
                .conversations()
                .iter()
                .map(|conversation| conversation.id.clone())
                .collect();
            Some(feed::spawn_feed(ids))
        } else {
            None
        };

        loop {
            let should_quit = if let Some(feed_handle) = feed.as_mut() {
                Self::next_turn(
                    &mut self.app,
                    &mut self.terminal,
                    &mut event_stream,
                    &mut tick_interval,
                    Some(feed_handle),
                )
                .await?
            } else {
                Self::next_turn(
                    &mut self.app,
                    &mut self.terminal,
                    &mut event_stream,
                    &mut tick_interval,
                    None,
                )
                .await?
            };

            if should_quit {
                break;
            }
        }

        if let Some(feed_handle) = feed {
            feed_handle.stop();
        }

        tracing::info!("event loop stopped");
        Ok(())
    }

    /// Wait for the next event, process it, and report whether to quit.
    async fn next_turn(
        app: &mut App,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        event_stream: &mut EventStream,
        tick_interval: &mut tokio::time::Interval,
        feed: Option<&mut FeedHandle>,
    ) -> Result<bool, RuntimeError> {
        let event = if let Some(feed_handle) = feed {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => Self::convert_terminal_event(&event),
                        Some(Err(e)) => return Err(RuntimeError::Io(e)),
                        None => return Ok(true),
                    }
                }

                Some(incoming) = feed_handle.events.recv() => Some(incoming),

                _ = tick_interval.tick() => Some(AppEvent::Tick),
            }
        } else {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => Self::convert_terminal_event(&event),
                        Some(Err(e)) => return Err(RuntimeError::Io(e)),
                        None => return Ok(true),
                    }
                }

                _ = tick_interval.tick() => Some(AppEvent::Tick),
            }
        };

        let Some(event) = event else {
            return Ok(false);
        };

        let actions = app.handle(event);
        for action in actions {
            match action {
                AppAction::Render => {
                    terminal.draw(|frame| ui::render(frame, app))?;
                },
                AppAction::Quit => return Ok(true),
            }
        }

        Ok(false)
    }

    /// Convert a crossterm event into an app event.
    fn convert_terminal_event(event: &Event) -> Option<AppEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Self::convert_key(key.code).map(AppEvent::Key)
            },
            Event::Resize(cols, rows) => Some(AppEvent::Resize(*cols, *rows)),
            _ => None,
        }
    }

    /// Convert crossterm `KeyCode` to `KeyInput`.
    fn convert_key(code: KeyCode) -> Option<KeyInput> {
        match code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Backspace => Some(KeyInput::Backspace),
            KeyCode::Delete => Some(KeyInput::Delete),
            KeyCode::Tab => Some(KeyInput::Tab),
            KeyCode::Esc => Some(KeyInput::Esc),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            KeyCode::Up => Some(KeyInput::Up),
            KeyCode::Down => Some(KeyInput::Down),
            KeyCode::Home => Some(KeyInput::Home),
            KeyCode::End => Some(KeyInput::End),
            _ => None,
        }
    }

    /// Render the UI.
    fn render(&mut self) -> Result<(), RuntimeError> {
        self.terminal.draw(|frame| {
            ui::render(frame, &self.app);
        })?;
        Ok(())
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}
