//! Idle countdown for the forced-move rule.
//!
//! The countdown runs while the human holds the turn. If it elapses
//! before the human moves, the computer moves instead. It is re-armed on
//! every human move, forced move and restart.

use std::time::{Duration, Instant};

/// Window the human gets before the computer moves for them.
pub const DEFAULT_IDLE_WINDOW: Duration = Duration::from_secs(6);

/// Countdown measured from the last time it was armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleTimer {
    window: Duration,
    armed_at: Instant,
}

impl IdleTimer {
    /// Creates a timer armed at `now`.
    pub fn new(window: Duration, now: Instant) -> Self {
        Self {
            window,
            armed_at: now,
        }
    }

    /// Restarts the countdown from `now`.
    pub fn rearm(&mut self, now: Instant) {
        self.armed_at = now;
    }

    /// Instant at which the countdown elapses.
    pub fn deadline(&self) -> Instant {
        self.armed_at + self.window
    }

    /// Time left before the deadline, zero once it has passed.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline().saturating_duration_since(now)
    }

    /// True once the countdown has run out.
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline()
    }
}
