//! Timer notification surface
//!
//! Events carry nothing beyond the firing instant. Fan-out is a plain
//! list of independent listeners invoked synchronously; a listener must
//! not block the emitter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// The five named transitions a countdown can announce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimerEventKind {
    /// Countdown started
    Started,
    /// Countdown stopped
    Stopped,
    /// Remaining time reset to the configured total
    Reset,
    /// Remaining time reached zero
    TimedOut,
    /// Remaining time dropped to the warning threshold
    Warning,
}

impl std::fmt::Display for TimerEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TimerEventKind::Started => "started",
            TimerEventKind::Stopped => "stopped",
            TimerEventKind::Reset => "reset",
            TimerEventKind::TimedOut => "timed out",
            TimerEventKind::Warning => "warning",
        };
        write!(f, "{}", name)
    }
}

/// A fired notification: which transition, and when it fired
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimerEvent {
    pub kind: TimerEventKind,
    pub at: DateTime<Utc>,
}

impl TimerEvent {
    /// Stamp an event with the current instant
    pub fn now(kind: TimerEventKind) -> Self {
        Self {
            kind,
            at: Utc::now(),
        }
    }
}

/// A registered observer of timer transitions
pub type EventListener = Box<dyn FnMut(&TimerEvent)>;

/// Shared recorder of observed event kinds
///
/// Hands out listeners that append to a common log. Useful for hosts
/// that render notifications after the fact, and for tests.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    kinds: Rc<RefCell<Vec<TimerEventKind>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a listener that records into this log
    pub fn listener(&self) -> EventListener {
        let kinds = Rc::clone(&self.kinds);
        Box::new(move |event| kinds.borrow_mut().push(event.kind))
    }

    /// Everything observed so far, in firing order
    pub fn kinds(&self) -> Vec<TimerEventKind> {
        self.kinds.borrow().clone()
    }

    /// How many times a given transition fired
    pub fn count_of(&self, kind: TimerEventKind) -> usize {
        self.kinds.borrow().iter().filter(|k| **k == kind).count()
    }

    /// Drop everything observed so far
    pub fn clear(&self) {
        self.kinds.borrow_mut().clear();
    }
}

// =============================================================================
// TESTS
// =============================================================================
