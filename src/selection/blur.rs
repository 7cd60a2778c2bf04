//! Delayed reset after the trigger input loses focus
//!
//! A blur can race a click that is about to (re)open the browse surface.
//! The guard delays the reset and lets the caller skip it when the surface
//! is open by the time the delay elapses.

use std::time::{Duration, Instant};

/// Outcome of polling the guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlurAction {
    /// Nothing pending, or the delay has not elapsed
    None,
    /// The delay elapsed while the browse surface was open
    Skipped,
    /// The delay elapsed; the in-progress selection should be reset
    Reset,
}

/// Pending blur timer
#[derive(Debug, Clone)]
pub struct BlurGuard {
    delay: Duration,
    pending_since: Option<Instant>,
}

impl BlurGuard {
    /// Create a guard with the given grace delay
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending_since: None,
        }
    }

    /// Grace delay
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether a reset is scheduled
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Schedule a reset; a later blur restarts the delay
    pub fn handle_blur_at(&mut self, now: Instant) {
        self.pending_since = Some(now);
    }

    /// Drop the pending reset
    pub fn cancel(&mut self) {
        self.pending_since = None;
    }

    /// Fire the pending reset once the delay has elapsed
    pub fn tick_at(&mut self, now: Instant, browse_open: bool) -> BlurAction {
        let Some(since) = self.pending_since else {
            return BlurAction::None;
        };
        if now.saturating_duration_since(since) < self.delay {
            return BlurAction::None;
        }
        self.pending_since = None;
        if browse_open {
            BlurAction::Skipped
        } else {
            BlurAction::Reset
        }
    }

    /// Time left until the pending reset fires
    #[must_use]
    pub fn time_until_fire(&self, now: Instant) -> Option<Duration> {
        let since = self.pending_since?;
        let elapsed = now.saturating_duration_since(since);
        Some(self.delay.saturating_sub(elapsed))
    }
}
