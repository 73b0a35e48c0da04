//! Integration tests for the timer stack
//!
//! Drives Countdown and DualCountdown the way a host UI would: one
//! tick per nominal second, reacting to the emitted events.

use gavel::core::{Countdown, DualCountdown, TickOutcome};
use gavel::types::{EventLog, TimerEventKind};
use gavel::DEFAULT_WARNING_SECS;

/// A full speech: start, warn near the end, expire on the last second
#[test]
fn test_full_speech_countdown() {
    let log = EventLog::new();
    let mut countdown = Countdown::new(30);
    countdown.on_event(log.listener());

    countdown.start();
    assert!(countdown.is_running());

    let mut timed_out_at = None;
    for second in 1..=30 {
        if countdown.tick() == TickOutcome::TimedOut {
            timed_out_at = Some(second);
            break;
        }
    }

    assert_eq!(timed_out_at, Some(30));
    assert!(!countdown.is_running());
    assert_eq!(log.count_of(TimerEventKind::TimedOut), 1);
    assert_eq!(log.count_of(TimerEventKind::Warning), 1);
}

/// Warning fires exactly when remaining hits the default threshold
#[test]
fn test_warning_at_default_threshold() {
    let mut countdown = Countdown::new(DEFAULT_WARNING_SECS + 2);
    countdown.start();

    assert_eq!(countdown.tick(), TickOutcome::Counting);
    assert_eq!(countdown.tick(), TickOutcome::Warning);
    assert_eq!(countdown.remaining_secs(), DEFAULT_WARNING_SECS);
}

/// A host that keeps ticking after expiry sees no duplicate timeout
#[test]
fn test_host_overticking_is_harmless() {
    let log = EventLog::new();
    let mut countdown = Countdown::with_warning(3, None);
    countdown.on_event(log.listener());
    countdown.start();

    for _ in 0..10 {
        countdown.tick();
    }

    assert_eq!(countdown.remaining_secs(), 0);
    assert_eq!(log.count_of(TimerEventKind::TimedOut), 1);
}

/// Speaker allotment expiring halts the session-level countdown
#[test]
fn test_speaker_expiry_cascades() {
    let session_log = EventLog::new();
    let speaker_log = EventLog::new();

    let mut dual = DualCountdown::new(600, 120, 20);
    dual.session_mut().on_event(session_log.listener());
    dual.speaker_mut().on_event(speaker_log.listener());

    dual.start();
    for _ in 0..120 {
        dual.tick();
    }

    assert!(!dual.is_running());
    assert!(!dual.speaker().is_running());
    assert_eq!(dual.session().remaining_secs(), 480);
    assert_eq!(speaker_log.count_of(TimerEventKind::TimedOut), 1);
    assert_eq!(speaker_log.count_of(TimerEventKind::Warning), 1);
    // The cascade stops the session countdown without expiring it
    assert_eq!(session_log.count_of(TimerEventKind::TimedOut), 0);
    assert!(session_log.count_of(TimerEventKind::Stopped) >= 1);
}

/// Chair resets the speaker allotment between speeches and carries on
#[test]
fn test_successive_speeches_share_the_total() {
    let mut dual = DualCountdown::new(300, 120, 20);
    dual.start();

    // First speech runs its full allotment
    for _ in 0..120 {
        dual.tick();
    }
    assert!(!dual.is_running());
    assert_eq!(dual.session().remaining_secs(), 180);

    // Next speaker: reset the allotment, restart everything
    dual.reset_speaker();
    dual.start();
    for _ in 0..120 {
        dual.tick();
    }
    assert_eq!(dual.session().remaining_secs(), 60);

    // Third speech cannot run full length; the session total expires first
    dual.reset_speaker();
    dual.start();
    let mut session_expired = false;
    for _ in 0..120 {
        let outcome = dual.tick();
        if outcome.session == TickOutcome::TimedOut {
            session_expired = true;
            break;
        }
    }
    assert!(session_expired);
    assert_eq!(dual.available_slots(), 2);
}
