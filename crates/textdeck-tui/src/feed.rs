//! Simulated incoming-message feed.
//!
//! Runs in-process using a channel for event transport. No network and no
//! delivery semantics: a tokio task picks a seeded conversation and a
//! canned line at randomized intervals so unread badges have something to
//! count. Demo mode only.

use std::time::Duration;

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use tokio::sync::mpsc;

use crate::app::AppEvent;

/// Inbound lines the feeder cycles through.
const LINES: &[&str] = &[
    "Hey, you free later?",
    "Can you call me back?",
    "Running 10 min late",
    "Did you see my last message?",
    "Sounds good!",
    "Let me check and get back to you",
];

/// Bounds for the delay between injected messages, in seconds.
const MIN_DELAY_SECS: u64 = 4;
const MAX_DELAY_SECS: u64 = 12;

/// Handle to a running feed task.
pub struct FeedHandle {
    /// Receive injected events.
    pub events: mpsc::Receiver<AppEvent>,
    /// Abort handle to stop the feed task.
    abort_handle: tokio::task::AbortHandle,
}

impl FeedHandle {
    /// Stop the feed.
    pub fn stop(&self) {
        self.abort_handle.abort();
    }
}

/// Spawn the feed over the given conversation ids.
///
/// Returns a handle with the event channel. The task runs until dropped,
/// stopped, or the receiver closes.
pub fn spawn_feed(conversation_ids: Vec<String>) -> FeedHandle {
    let (tx, rx) = mpsc::channel::<AppEvent>(16);

    let handle = tokio::spawn(async move {
        let mut rng = StdRng::from_os_rng();

        loop {
            let delay = rng.random_range(MIN_DELAY_SECS..=MAX_DELAY_SECS);
            tokio::time::sleep(Duration::from_secs(delay)).await;

            let Some(conversation_id) = conversation_ids.choose(&mut rng) else {
                break;
            };
            let Some(text) = LINES.choose(&mut rng) else {
                break;
            };

            let event = AppEvent::Incoming {
                conversation_id: conversation_id.clone(),
                text: (*text).to_string(),
            };
            if tx.send(event).await.is_err() {
                break;
            }
        }
    });

    FeedHandle { events: rx, abort_handle: handle.abort_handle() }
}
