//! Session phase definitions

use serde::{Deserialize, Serialize};

/// The procedural phase a committee session is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionPhase {
    /// Nothing in progress
    Idle,
    /// Attendance is being taken
    RollCall,
    /// A speakers list is running
    SpeakersList,
    /// A motion is on the floor
    Motion,
    /// A document is being presented
    FileView,
    /// A vote is in progress
    Vote,
    /// Only a bare timer is running
    TimerOnly,
}

impl SessionPhase {
    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            SessionPhase::Idle => "\x1b[90m",         // Gray
            SessionPhase::RollCall => "\x1b[36m",     // Cyan
            SessionPhase::SpeakersList => "\x1b[32m", // Green
            SessionPhase::Motion => "\x1b[33m",       // Yellow
            SessionPhase::FileView => "\x1b[34m",     // Blue
            SessionPhase::Vote => "\x1b[35m",         // Magenta
            SessionPhase::TimerOnly => "\x1b[37m",    // White
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionPhase::Idle => "IDLE",
            SessionPhase::RollCall => "ROLL CALL",
            SessionPhase::SpeakersList => "SPEAKERS LIST",
            SessionPhase::Motion => "MOTION",
            SessionPhase::FileView => "FILE VIEW",
            SessionPhase::Vote => "VOTE",
            SessionPhase::TimerOnly => "TIMER",
        };
        write!(f, "{}", name)
    }
}
