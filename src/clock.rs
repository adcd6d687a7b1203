//! Wall-clock abstraction.
//!
//! The engine never reads time on its own - callers supply "now" through a
//! `Clock` so that settlement stays deterministic under test and the engine
//! has no ambient global state.

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of "now" in milliseconds since the Unix epoch.
///
/// Implementations may jump backward or forward (device sleep, manual time
/// changes); the engine is required to tolerate both.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        // A clock set before the epoch reads as 0 rather than panicking;
        // settlement treats that like any other backward jump.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// A manually driven clock for tests and demos.
#[derive(Debug, Default)]
pub struct FixedClock {
    now: Cell<u64>,
}

impl FixedClock {
    pub fn new(now_ms: u64) -> Self {
        Self {
            now: Cell::new(now_ms),
        }
    }

    /// Jump to an absolute time (may move backward).
    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }

    /// Advance by a delta.
    pub fn advance(&self, delta_ms: u64) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_advances_and_jumps() {
        let clock = FixedClock::new(1_000);
        assert_eq!(clock.now_ms(), 1_000);

        clock.advance(500);
        assert_eq!(clock.now_ms(), 1_500);

        // Backward jumps are allowed - the engine absorbs them.
        clock.set(200);
        assert_eq!(clock.now_ms(), 200);
    }

    #[test]
    fn test_system_clock_is_past_2020() {
        // 2020-01-01 in epoch ms; sanity check that we read real time.
        assert!(SystemClock.now_ms() > 1_577_836_800_000);
    }
}
