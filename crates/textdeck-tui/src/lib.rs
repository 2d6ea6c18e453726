//! Terminal UI for textdeck.
//!
//! A thin shell over [`textdeck_core::ChatStore`]: a pure [`App`] state
//! machine translates key and tick events into store mutations and render
//! requests, and the async [`runtime::Runtime`] owns terminal I/O.
//!
//! This crate only handles presentation; every chat-domain invariant lives
//! in `textdeck-core`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod app;
pub mod feed;
pub mod runtime;
pub mod ui;

pub use app::{App, AppAction, AppEvent, KeyInput, ListFocus, Screen};
pub use runtime::{Runtime, RuntimeError};
