//! Document category definitions

use serde::{Deserialize, Serialize};

/// Kinds of documents a committee handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileCategory {
    WorkingPaper,
    DraftResolution,
    Amendment,
    DraftDirective,
    Crisis,
    PolicySuggestion,
    Miscellaneous,
}

impl std::fmt::Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FileCategory::WorkingPaper => "working paper",
            FileCategory::DraftResolution => "draft resolution",
            FileCategory::Amendment => "amendment",
            FileCategory::DraftDirective => "draft directive",
            FileCategory::Crisis => "crisis file",
            FileCategory::PolicySuggestion => "policy suggestion",
            FileCategory::Miscellaneous => "miscellaneous",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_serde_names() {
        assert_eq!(FileCategory::DraftResolution.to_string(), "draft resolution");
        assert_eq!(
            serde_json::to_string(&FileCategory::WorkingPaper).unwrap(),
            "\"WORKING_PAPER\""
        );
    }
}
