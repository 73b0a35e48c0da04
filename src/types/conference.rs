//! Conference metadata

use serde::{Deserialize, Serialize};

/// Working language of the conference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkLanguage {
    SimplifiedChinese,
    English,
}

/// Rules of procedure in force
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleSet {
    Robert,
    European,
    Security,
}

/// Which of the (up to two) topics is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TopicSelection {
    /// First topic chosen, or the only topic
    Topic1,
    /// Second topic chosen
    Topic2,
    /// Awaiting selection
    Unchosen,
}

/// Basic information about a conference committee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conference {
    pub title: String,
    pub committee: String,
    topics: Vec<String>,
    pub language: WorkLanguage,
    pub rule: RuleSet,
    topic_sel: TopicSelection,
}

impl Conference {
    /// Single-topic conference; the topic is considered chosen
    pub fn new(
        title: impl Into<String>,
        committee: impl Into<String>,
        topic: impl Into<String>,
        language: WorkLanguage,
    ) -> Self {
        Self {
            title: title.into(),
            committee: committee.into(),
            topics: vec![topic.into()],
            language,
            rule: RuleSet::Robert,
            topic_sel: TopicSelection::Topic1,
        }
    }

    /// Dual-topic conference; selection starts out pending
    pub fn dual_topic(
        title: impl Into<String>,
        committee: impl Into<String>,
        topic1: impl Into<String>,
        topic2: impl Into<String>,
        language: WorkLanguage,
    ) -> Self {
        let mut conference = Self::new(title, committee, topic1, language);
        conference.topics.push(topic2.into());
        conference.topic_sel = TopicSelection::Unchosen;
        conference
    }

    /// The selected topic, or `None` while selection is pending
    pub fn topic(&self) -> Option<&str> {
        match self.topic_sel {
            TopicSelection::Topic1 => self.topics.first().map(String::as_str),
            TopicSelection::Topic2 => self.topics.get(1).map(String::as_str),
            TopicSelection::Unchosen => None,
        }
    }

    pub fn topic_selection(&self) -> TopicSelection {
        self.topic_sel
    }

    pub fn select_topic(&mut self, selection: TopicSelection) {
        self.topic_sel = selection;
    }
}

// =============================================================================
// TESTS
// =============================================================================
