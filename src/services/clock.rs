//! Wall-clock source for bookmark timestamps.

use std::time::{SystemTime, UNIX_EPOCH};

/// Supplies the current UNIX timestamp in seconds.
pub trait Clock {
    fn now(&self) -> i64;
}

/// Reads the system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}
