//! Yield dispositions for the primary speakers list

use serde::{Deserialize, Serialize};

/// What a speaker does with remaining time after speaking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum YieldTo {
    /// No yield recorded
    NoYield,
    /// Ceded to another nation
    ToNation,
    /// Ceded to questions
    ToQuestion,
    /// Ceded to comments
    ToComment,
    /// Ceded to the chair
    ToDais,
}

impl std::fmt::Display for YieldTo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            YieldTo::NoYield => "no yield",
            YieldTo::ToNation => "to nation",
            YieldTo::ToQuestion => "to questions",
            YieldTo::ToComment => "to comments",
            YieldTo::ToDais => "to the dais",
        };
        write!(f, "{}", name)
    }
}
