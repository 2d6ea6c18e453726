//! Monotonic message id generation.
//!
//! Wall-clock ids collide when two messages are created within the same
//! millisecond. A plain counter avoids that: ids stay unique for the
//! process lifetime regardless of clock resolution.

/// Issues unique, strictly increasing decimal string ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    /// Create a generator that starts above every numeric id in `existing`.
    ///
    /// Non-numeric ids are ignored; they cannot collide with counter output.
    pub(crate) fn seeded_from<'a>(existing: impl IntoIterator<Item = &'a str>) -> Self {
        let max_seen = existing.into_iter().filter_map(|id| id.parse::<u64>().ok()).max();
        Self { next: max_seen.map_or(1, |max| max.saturating_add(1)) }
    }

    /// Take the next unique id.
    pub(crate) fn next_id(&mut self) -> String {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_above_largest_numeric_seed_id() {
        let mut ids = IdGenerator::seeded_from(["1", "7", "3"]);
        assert_eq!(ids.next_id(), "8");
    }

    #[test]
    fn ignores_non_numeric_ids() {
        let mut ids = IdGenerator::seeded_from(["m-1", "x"]);
        assert_eq!(ids.next_id(), "1");
    }

    #[test]
    fn rapid_succession_stays_unique() {
        let mut ids = IdGenerator::seeded_from(["1"]);
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_eq!((a, b, c), ("2".into(), "3".into(), "4".into()));
    }
}
