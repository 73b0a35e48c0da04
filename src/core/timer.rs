//! Countdown: a tick-driven parliamentary timer
//!
//! The host drives `tick()` once per second (nominally) and observes the
//! named transitions through registered listeners. Ticking a countdown
//! whose remaining time is already zero is the designed expiry path,
//! not an error.

use crate::types::{EventListener, TimerEvent, TimerEventKind};
use crate::DEFAULT_WARNING_SECS;
use serde::{Deserialize, Serialize};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TickOutcome {
    /// Remaining time decremented, nothing notable
    Counting,
    /// Remaining time reached the warning threshold on this tick
    Warning,
    /// Remaining time ran out; the countdown stopped itself
    TimedOut,
}

/// A countdown with threshold-crossing notifications
pub struct Countdown {
    /// Fixed at construction
    total_secs: u32,
    /// Counts down toward zero, one tick at a time
    remaining_secs: u32,
    /// Start/stop flag
    running: bool,
    /// Remaining value at which `Warning` fires; `None` disables it
    warning_secs: Option<u32>,
    /// `Warning` fires at most once per countdown cycle
    warning_fired: bool,
    /// `TimedOut` fires at most once per countdown cycle
    timeout_fired: bool,
    listeners: Vec<EventListener>,
}

impl Countdown {
    /// Create a countdown with the default warning threshold
    pub fn new(total_secs: u32) -> Self {
        Self::with_warning(total_secs, Some(DEFAULT_WARNING_SECS))
    }

    /// Create a countdown with a custom (or no) warning threshold
    pub fn with_warning(total_secs: u32, warning_secs: Option<u32>) -> Self {
        Self {
            total_secs,
            remaining_secs: total_secs,
            running: false,
            warning_secs,
            warning_fired: false,
            timeout_fired: false,
            listeners: Vec::new(),
        }
    }

    /// Register a listener for this countdown's transitions
    pub fn on_event(&mut self, listener: EventListener) {
        self.listeners.push(listener);
    }

    /// Start counting; notifies `Started`
    pub fn start(&mut self) {
        self.running = true;
        self.emit(TimerEventKind::Started);
    }

    /// Stop counting; notifies `Stopped`
    pub fn stop(&mut self) {
        self.running = false;
        self.emit(TimerEventKind::Stopped);
    }

    /// Restore the full duration and re-arm warning and expiry; notifies `Reset`
    pub fn reset(&mut self) {
        self.remaining_secs = self.total_secs;
        self.warning_fired = false;
        self.timeout_fired = false;
        self.emit(TimerEventKind::Reset);
    }

    /// Count down by one second
    ///
    /// Expiry fires on the tick that brings the remaining time to zero,
    /// and again never: a countdown ticked past zero keeps reporting
    /// `TimedOut` but notifies only once per cycle.
    pub fn tick(&mut self) -> TickOutcome {
        if self.remaining_secs == 0 {
            self.expire();
            return TickOutcome::TimedOut;
        }

        self.remaining_secs -= 1;

        let warned = !self.warning_fired && self.warning_secs == Some(self.remaining_secs);
        if warned {
            self.warning_fired = true;
            self.emit(TimerEventKind::Warning);
        }

        if self.remaining_secs == 0 {
            self.expire();
            TickOutcome::TimedOut
        } else if warned {
            TickOutcome::Warning
        } else {
            TickOutcome::Counting
        }
    }

    /// Notify `TimedOut` (once per cycle) and stop
    fn expire(&mut self) {
        if !self.timeout_fired {
            self.timeout_fired = true;
            self.emit(TimerEventKind::TimedOut);
        }
        self.stop();
    }

    fn emit(&mut self, kind: TimerEventKind) {
        let event = TimerEvent::now(kind);
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    /// Is the countdown running?
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Remaining seconds
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Configured total seconds
    pub fn total_secs(&self) -> u32 {
        self.total_secs
    }

    /// Configured warning threshold
    pub fn warning_secs(&self) -> Option<u32> {
        self.warning_secs
    }

    /// Change the warning threshold; applies from the next tick
    pub fn set_warning_secs(&mut self, warning_secs: Option<u32>) {
        self.warning_secs = warning_secs;
    }
}

impl std::fmt::Debug for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Countdown")
            .field("total_secs", &self.total_secs)
            .field("remaining_secs", &self.remaining_secs)
            .field("running", &self.running)
            .field("warning_secs", &self.warning_secs)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
