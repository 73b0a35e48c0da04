//! Nation roster model
//!
//! Pure value data: nothing here ticks or fires events. A nation's
//! fields are mutated directly by the host as the session unfolds.

use serde::{Deserialize, Serialize};

/// One delegate of a nation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delegate {
    pub name: String,
    pub school: String,
    pub grade: String,
}

impl Delegate {
    pub fn new(
        name: impl Into<String>,
        school: impl Into<String>,
        grade: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            school: school.into(),
            grade: grade.into(),
        }
    }
}

impl std::fmt::Display for Delegate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A single participating nation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nation {
    /// Nation name
    pub name: String,
    /// Delegates representing this nation
    pub delegates: Vec<Delegate>,
    /// Vote weight, at least 1 (one ballot)
    pub vote_weight: u32,
    /// Submitted position paper, if any
    pub position_paper: Option<String>,
    /// Present at this session
    pub attending: bool,
    /// Can unilaterally block a vote outcome
    pub veto_power: bool,
}

impl Nation {
    /// Create a nation with a single ballot and no veto
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            delegates: Vec::new(),
            vote_weight: 1,
            position_paper: None,
            attending: false,
            veto_power: false,
        }
    }

    /// Create a nation with a custom vote weight
    pub fn with_weight(name: impl Into<String>, vote_weight: u32) -> Self {
        Self {
            vote_weight,
            ..Self::new(name)
        }
    }

    /// Create a nation with a custom vote weight and veto power
    pub fn with_veto(name: impl Into<String>, vote_weight: u32, veto_power: bool) -> Self {
        Self {
            veto_power,
            ..Self::with_weight(name, vote_weight)
        }
    }

    /// All delegate names joined by `delimiter`
    pub fn delegate_names(&self, delimiter: &str) -> String {
        self.delegates
            .iter()
            .map(|d| d.name.as_str())
            .collect::<Vec<_>>()
            .join(delimiter)
    }

    /// Vote weight as display digits, with `*` marking veto power
    pub fn vote_weight_display(&self) -> String {
        let mut display = self.vote_weight.to_string();
        if self.veto_power {
            display.push('*');
        }
        display
    }
}

impl std::fmt::Display for Nation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// An ordered list of nations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NationList {
    nations: Vec<Nation>,
}

impl NationList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, nation: Nation) {
        self.nations.push(nation);
    }

    pub fn get(&self, index: usize) -> Option<&Nation> {
        self.nations.get(index)
    }

    pub fn len(&self) -> usize {
        self.nations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Nation> {
        self.nations.iter()
    }

    /// Find a nation by exact name
    pub fn find(&self, name: &str) -> Option<&Nation> {
        self.nations.iter().find(|n| n.name == name)
    }

    /// Find a nation by exact name, mutably
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Nation> {
        self.nations.iter_mut().find(|n| n.name == name)
    }

    /// Count of nations marked attending
    pub fn attending_count(&self) -> usize {
        self.nations.iter().filter(|n| n.attending).count()
    }

    /// All nation names joined by `delimiter`
    pub fn joined_names(&self, delimiter: &str) -> String {
        self.nations
            .iter()
            .map(|n| n.name.as_str())
            .collect::<Vec<_>>()
            .join(delimiter)
    }
}

impl From<Vec<Nation>> for NationList {
    fn from(nations: Vec<Nation>) -> Self {
        Self { nations }
    }
}

impl<'a> IntoIterator for &'a NationList {
    type Item = &'a Nation;
    type IntoIter = std::slice::Iter<'a, Nation>;

    fn into_iter(self) -> Self::IntoIter {
        self.nations.iter()
    }
}

// =============================================================================
// TESTS
// =============================================================================
