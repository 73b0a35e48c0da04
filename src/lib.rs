//! Gavel: procedural state for deliberative-assembly sessions
//!
//! Tracks the roster of participating nations, speaking-order lists,
//! parliamentary countdown timers and a rate-scaled session clock.
//! Everything is single-threaded and tick-driven: the host calls
//! `tick()` on a real-time cadence and reacts to the emitted events.

pub mod core;
pub mod types;

// =============================================================================
// DEFAULTS [C] - Parliamentary conventions
// =============================================================================

/// Default speech length in seconds (two minutes per speaker)
pub const DEFAULT_SPEECH_SECS: u32 = 120;

/// Default warning threshold in seconds
/// Fires once per countdown, when remaining time drops to this value
pub const DEFAULT_WARNING_SECS: u32 = 20;

/// Nominal tick cadence for hosts driving the timers (milliseconds)
pub const TICK_INTERVAL_MS: u32 = 1000;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
