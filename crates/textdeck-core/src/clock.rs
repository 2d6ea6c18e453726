//! Clock abstraction for message time labels.
//!
//! The store only needs one thing from the environment: the current local
//! wall-clock time rendered as a display label. Keeping that behind a trait
//! makes every store operation deterministic under test.

use chrono::Local;

/// Source of message time labels.
pub trait Clock {
    /// Current local time rendered as `HH:MM`.
    fn time_label(&self) -> String;
}

/// Production clock backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn time_label(&self) -> String {
        Local::now().format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_renders_hour_minute() {
        let label = SystemClock.time_label();
        assert_eq!(label.len(), 5);
        assert_eq!(label.as_bytes()[2], b':');
    }
}
