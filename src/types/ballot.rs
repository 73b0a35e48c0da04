//! Vote opinion definitions

use serde::{Deserialize, Serialize};

/// A nation's stance in a vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoteOpinion {
    Yes,
    No,
    Abstain,
}

impl std::fmt::Display for VoteOpinion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VoteOpinion::Yes => "YES",
            VoteOpinion::No => "NO",
            VoteOpinion::Abstain => "ABSTAIN",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_serde_names() {
        assert_eq!(VoteOpinion::Abstain.to_string(), "ABSTAIN");
        assert_eq!(
            serde_json::to_string(&VoteOpinion::Yes).unwrap(),
            "\"YES\""
        );
    }
}
