//! Node ID generation.
//!
//! IDs are decimal strings of the Unix time in milliseconds. When the clock
//! has not advanced since the last ID (or went backwards) the previous value
//! is bumped by one, so a single generator never repeats itself.

use std::time::{SystemTime, UNIX_EPOCH};

/// Issues strictly increasing, timestamp-derived node IDs.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: u128,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next ID for the given clock reading in milliseconds.
    pub fn next_at(&mut self, now_millis: u128) -> String {
        self.last = now_millis.max(self.last + 1);
        self.last.to_string()
    }

    /// Returns the next ID based on the system clock.
    pub fn next_id(&mut self) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        self.next_at(now)
    }
}
