//! SessionClock: the simulated session timeline
//!
//! Advances at a configurable multiple of real elapsed time. When the
//! chair suspends the session with `keep_running`, the suspension
//! instant is recorded and the whole gap is folded back in, rate-scaled,
//! on the next start.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A rate-scaled clock timestamping session events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClock {
    /// Current instant on the session timeline
    current: DateTime<Utc>,
    /// Multiplier applied to elapsed wall time, at least 1
    rate: i32,
    /// Wall instant the session was suspended at, when the timeline is
    /// meant to keep flowing through the suspension
    saved_at: Option<DateTime<Utc>>,
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionClock {
    /// Clock starting now at real-time rate
    pub fn new() -> Self {
        Self::starting_at(Utc::now())
    }

    /// Clock starting at a given instant, real-time rate
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            current: start,
            rate: 1,
            saved_at: None,
        }
    }

    /// Clock starting at a given instant with a rate multiplier
    ///
    /// Rates below 1 are clamped to 1.
    pub fn with_rate(start: DateTime<Utc>, rate: i32) -> Self {
        Self {
            rate: rate.max(1),
            ..Self::starting_at(start)
        }
    }

    /// Start the timeline
    ///
    /// If a suspension instant is recorded, the elapsed gap is folded
    /// into the current time at the configured rate, then cleared.
    pub fn start(&mut self) {
        if let Some(paused_at) = self.saved_at.take() {
            let elapsed = (Utc::now() - paused_at) * self.rate;
            self.current = self.current + elapsed;
        }
    }

    /// Stop the timeline
    ///
    /// With `keep_running`, the suspension instant is recorded so the
    /// gap is reclaimed on the next start; otherwise the current time is
    /// left untouched and the gap is simply lost.
    pub fn stop(&mut self, keep_running: bool) {
        if keep_running {
            self.saved_at = Some(Utc::now());
        }
    }

    /// Advance the timeline by one host tick of `interval_ms` milliseconds
    pub fn tick(&mut self, interval_ms: u32) {
        let scaled = Duration::milliseconds(i64::from(interval_ms) * i64::from(self.rate));
        self.current = self.current + scaled;
    }

    /// Current instant on the session timeline
    pub fn current(&self) -> DateTime<Utc> {
        self.current
    }

    /// Rate multiplier
    pub fn rate(&self) -> i32 {
        self.rate
    }

    /// Change the rate multiplier; values below 1 are clamped to 1
    pub fn set_rate(&mut self, rate: i32) {
        self.rate = rate.max(1);
    }

    /// Is a suspension instant recorded?
    pub fn is_suspended(&self) -> bool {
        self.saved_at.is_some()
    }
}

// =============================================================================
// TESTS
// =============================================================================
