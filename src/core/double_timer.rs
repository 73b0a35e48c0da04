//! DualCountdown: a session-total countdown paired with a per-speaker one
//!
//! Two owned countdowns, explicitly sequenced: within one `tick()` the
//! session countdown is accounted first, then the speaker countdown.
//! Coupling is one-directional: the speaker allotment running out halts
//! the whole dual timer, while the session total expiring stops only
//! itself.

use crate::core::timer::{Countdown, TickOutcome};
use serde::{Deserialize, Serialize};

/// Per-countdown outcomes of one dual tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DualTick {
    pub session: TickOutcome,
    pub speaker: TickOutcome,
}

/// A total-duration countdown composed with a per-speaker countdown
#[derive(Debug)]
pub struct DualCountdown {
    session: Countdown,
    speaker: Countdown,
}

impl DualCountdown {
    /// Create a dual countdown
    ///
    /// The warning threshold applies to the speaker countdown; the
    /// session countdown carries none.
    pub fn new(total_secs: u32, speaker_secs: u32, warning_secs: u32) -> Self {
        Self {
            session: Countdown::with_warning(total_secs, None),
            speaker: Countdown::with_warning(speaker_secs, Some(warning_secs)),
        }
    }

    /// Start both countdowns, session first
    pub fn start(&mut self) {
        self.session.start();
        self.speaker.start();
    }

    /// Stop both countdowns, session first
    pub fn stop(&mut self) {
        self.session.stop();
        self.speaker.stop();
    }

    /// Advance both countdowns by one second, session first
    ///
    /// The speaker countdown expiring on this tick stops the whole dual
    /// timer.
    pub fn tick(&mut self) -> DualTick {
        let session = self.session.tick();
        let speaker = self.speaker.tick();

        if speaker == TickOutcome::TimedOut {
            self.stop();
        }

        DualTick { session, speaker }
    }

    /// Restore the speaker countdown to its full allotment
    pub fn reset_speaker(&mut self) {
        self.speaker.reset();
    }

    /// How many full-length speeches the total budget accommodates
    ///
    /// A zero-length speech time counts against a one-second floor.
    pub fn available_slots(&self) -> u32 {
        self.session.total_secs() / self.speaker.total_secs().max(1)
    }

    /// Is the session countdown running?
    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    /// The session-total countdown
    pub fn session(&self) -> &Countdown {
        &self.session
    }

    /// The session-total countdown, mutable (listener registration)
    pub fn session_mut(&mut self) -> &mut Countdown {
        &mut self.session
    }

    /// The per-speaker countdown
    pub fn speaker(&self) -> &Countdown {
        &self.speaker
    }

    /// The per-speaker countdown, mutable (listener registration)
    pub fn speaker_mut(&mut self) -> &mut Countdown {
        &mut self.speaker
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EventLog, TimerEventKind};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_available_slots_is_integer_division() {
        assert_eq!(DualCountdown::new(600, 120, 20).available_slots(), 5);
        assert_eq!(DualCountdown::new(300, 120, 20).available_slots(), 2);
        assert_eq!(DualCountdown::new(100, 120, 20).available_slots(), 0);
    }

    #[test]
    fn test_available_slots_with_zero_speech_time() {
        let dual = DualCountdown::new(600, 0, 20);
        assert_eq!(dual.available_slots(), 600);
    }

    #[test]
    fn test_start_and_stop_propagate() {
        let mut dual = DualCountdown::new(600, 120, 20);

        dual.start();
        assert!(dual.session().is_running());
        assert!(dual.speaker().is_running());

        dual.stop();
        assert!(!dual.session().is_running());
        assert!(!dual.speaker().is_running());
    }

    #[test]
    fn test_tick_advances_both() {
        let mut dual = DualCountdown::new(600, 120, 20);
        dual.start();
        dual.tick();

        assert_eq!(dual.session().remaining_secs(), 599);
        assert_eq!(dual.speaker().remaining_secs(), 119);
    }

    #[test]
    fn test_speaker_expiry_halts_session_same_tick() {
        let mut dual = DualCountdown::new(600, 3, 1);
        dual.start();

        dual.tick(); // speaker 2
        dual.tick(); // speaker 1, warning
        assert!(dual.session().is_running());

        let outcome = dual.tick(); // speaker 0, expiry cascades
        assert_eq!(outcome.speaker, TickOutcome::TimedOut);
        assert!(!dual.session().is_running());
        assert!(!dual.speaker().is_running());
    }

    #[test]
    fn test_session_expiry_does_not_stop_speaker() {
        let mut dual = DualCountdown::new(2, 600, 20);
        dual.start();

        dual.tick();
        let outcome = dual.tick(); // session expires
        assert_eq!(outcome.session, TickOutcome::TimedOut);
        assert!(!dual.session().is_running());
        assert!(dual.speaker().is_running());
    }

    #[test]
    fn test_session_accounted_before_speaker() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut dual = DualCountdown::new(3, 3, 1);

        let tag = Rc::clone(&order);
        dual.session_mut()
            .on_event(Box::new(move |event| tag.borrow_mut().push(format!("session {}", event.kind))));
        let tag = Rc::clone(&order);
        dual.speaker_mut()
            .on_event(Box::new(move |event| tag.borrow_mut().push(format!("speaker {}", event.kind))));

        dual.start();
        assert_eq!(
            *order.borrow(),
            ["session started", "speaker started"]
        );
    }

    #[test]
    fn test_reset_speaker_restores_allotment_only() {
        let mut dual = DualCountdown::new(600, 120, 20);
        dual.start();
        dual.tick();
        dual.tick();

        dual.reset_speaker();
        assert_eq!(dual.speaker().remaining_secs(), 120);
        assert_eq!(dual.session().remaining_secs(), 598);
    }

    #[test]
    fn test_speaker_warning_observed() {
        let log = EventLog::new();
        let mut dual = DualCountdown::new(600, 5, 3);
        dual.speaker_mut().on_event(log.listener());
        dual.start();

        dual.tick(); // 4
        dual.tick(); // 3 - warning
        assert_eq!(log.count_of(TimerEventKind::Warning), 1);
    }
}
