//! End-to-end session walkthrough
//!
//! Plays a short committee session: conference setup, roll call, a
//! bounded speakers list driven by the dual countdown, and the session
//! clock ticking alongside.

use pretty_assertions::assert_eq;

use chrono::{Duration, TimeZone, Utc};
use gavel::core::{DualCountdown, SessionClock, SpeakersList, TickOutcome};
use gavel::types::{Conference, Nation, NationList, TopicSelection, WorkLanguage, YieldTo};
use gavel::TICK_INTERVAL_MS;

#[test]
fn test_session_walkthrough() {
    // Conference setup with two candidate topics
    let mut conference = Conference::dual_topic(
        "Harbor MUN",
        "DISEC",
        "Autonomous weapons",
        "Small arms trafficking",
        WorkLanguage::English,
    );
    assert_eq!(conference.topic(), None);
    conference.select_topic(TopicSelection::Topic1);
    assert_eq!(conference.topic(), Some("Autonomous weapons"));

    // Roll call
    let mut roster = NationList::from(vec![
        Nation::with_veto("France", 1, true),
        Nation::new("Brazil"),
        Nation::new("Japan"),
    ]);
    for name in ["France", "Japan"] {
        roster.find_mut(name).unwrap().attending = true;
    }
    assert_eq!(roster.attending_count(), 2);

    // Speakers list sized by the time budget: 90 s each, 180 s total
    let mut list = SpeakersList::bounded("GSL", 90, 180).allow_yields();
    let mut dual = DualCountdown::new(list.total_secs(), list.single_secs(), 10);
    assert_eq!(dual.available_slots(), 2);

    for nation in roster.iter().filter(|n| n.attending) {
        list.add_nation(nation.clone()).unwrap();
    }
    assert_eq!(list.len(), 2);

    // Session clock running at double speed
    let opening = Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap();
    let mut clock = SessionClock::with_rate(opening, 2);

    // First speech: France speaks 60 s then yields to questions
    dual.start();
    for _ in 0..60 {
        dual.tick();
        clock.tick(TICK_INTERVAL_MS);
    }
    assert!(dual.is_running());
    assert_eq!(dual.speaker().remaining_secs(), 30);

    dual.stop();
    list.record_yield(YieldTo::ToQuestion).unwrap();
    assert_eq!(list.advance(1), 1);
    assert_eq!(list.current_nation().unwrap().name, "Japan");

    // Second speech: Japan runs the allotment out; the cascade stops
    // the session-level countdown on the same tick
    dual.reset_speaker();
    dual.start();
    let mut last = None;
    for _ in 0..90 {
        last = Some(dual.tick());
        clock.tick(TICK_INTERVAL_MS);
    }
    assert_eq!(last.unwrap().speaker, TickOutcome::TimedOut);
    assert!(!dual.is_running());
    list.record_yield(YieldTo::NoYield).unwrap();
    assert_eq!(list.advance(2), 2);
    assert!(list.current_nation().is_none());

    // 150 ticked seconds at rate 2 moved the session timeline 300 s
    assert_eq!(clock.current() - opening, Duration::seconds(300));

    // The session budget has 30 s left; no third slot existed anyway
    assert_eq!(dual.session().remaining_secs(), 30);
    assert_eq!(list.spoken_log(), &[1, 2]);
    assert_eq!(
        list.yield_log().unwrap(),
        &[YieldTo::ToQuestion, YieldTo::NoYield]
    );
}
