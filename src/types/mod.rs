//! Core types for Gavel

mod ballot;
mod conference;
mod event;
mod nation;
mod paper;
mod phase;
mod yield_to;

pub use ballot::VoteOpinion;
pub use conference::{Conference, RuleSet, TopicSelection, WorkLanguage};
pub use event::{EventListener, EventLog, TimerEvent, TimerEventKind};
pub use nation::{Delegate, Nation, NationList};
pub use paper::FileCategory;
pub use phase::SessionPhase;
pub use yield_to::YieldTo;
