//! SpeakersList: the ordered queue of nations scheduled to speak
//!
//! Capacity derives from the total/per-speaker time ratio; a total of
//! zero means unbounded. The cursor marks whose turn it is. Advancing
//! past the roster end is deliberately unchecked - hosts that run
//! repeated yield rounds rely on it.

use crate::types::{Nation, NationList, YieldTo};
use crate::DEFAULT_SPEECH_SECS;
use serde::{Deserialize, Serialize};

/// Failures when mutating a speakers list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeakersListError {
    /// The list already holds as many nations as the time budget allows
    CapacityExceeded,
    /// Yield recording on a list created without yield support
    YieldNotAllowed,
}

impl std::fmt::Display for SpeakersListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            SpeakersListError::CapacityExceeded => "speakers list is full",
            SpeakersListError::YieldNotAllowed => "speakers list does not accept yields",
        };
        write!(f, "{}", message)
    }
}

impl std::error::Error for SpeakersListError {}

/// An ordered speaking queue with per-speaker and total time budgets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakersList {
    name: String,
    /// Seconds each speaker gets
    single_secs: u32,
    /// Total seconds for the whole list; zero means unbounded
    total_secs: u32,
    /// Position of the speaking marker
    current: usize,
    nations: NationList,
    /// Record ids of finished speeches, parallel to the queue
    spoken_log: Vec<u32>,
    /// Yield dispositions keyed by position; present iff yields allowed
    yield_log: Option<Vec<YieldTo>>,
}

impl SpeakersList {
    /// Unbounded list with the default speech time
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_speech_time(name, DEFAULT_SPEECH_SECS)
    }

    /// Unbounded list with a specific speech time
    pub fn with_speech_time(name: impl Into<String>, single_secs: u32) -> Self {
        Self {
            name: name.into(),
            single_secs,
            total_secs: 0,
            current: 0,
            nations: NationList::new(),
            spoken_log: Vec::new(),
            yield_log: None,
        }
    }

    /// Bounded list: capacity is `total_secs / single_secs`
    pub fn bounded(name: impl Into<String>, single_secs: u32, total_secs: u32) -> Self {
        Self {
            total_secs,
            ..Self::with_speech_time(name, single_secs)
        }
    }

    /// Enable yield tracking on this list
    pub fn allow_yields(mut self) -> Self {
        self.yield_log = Some(Vec::new());
        self
    }

    /// Slot capacity, or `None` when the list is unbounded
    pub fn capacity(&self) -> Option<usize> {
        if self.total_secs == 0 {
            None
        } else {
            Some((self.total_secs / self.single_secs.max(1)) as usize)
        }
    }

    /// Append a nation to the speaking order
    ///
    /// Returns the count of remaining free slots, or the new length when
    /// the list is unbounded.
    pub fn add_nation(&mut self, nation: Nation) -> Result<usize, SpeakersListError> {
        match self.capacity() {
            Some(capacity) if self.nations.len() >= capacity => {
                Err(SpeakersListError::CapacityExceeded)
            }
            Some(capacity) => {
                self.nations.push(nation);
                Ok(capacity - self.nations.len())
            }
            None => {
                self.nations.push(nation);
                Ok(self.nations.len())
            }
        }
    }

    /// Close the current speech and move the marker to the next nation
    ///
    /// `spoken_marker` is an opaque record id appended to the spoken
    /// history; the new marker position is returned. No bounds check
    /// against the roster length.
    pub fn advance(&mut self, spoken_marker: u32) -> usize {
        self.spoken_log.push(spoken_marker);
        self.current += 1;
        self.current
    }

    /// Append a yield disposition for the position that just spoke
    ///
    /// The log is append-only and not validated against the speaking
    /// order.
    pub fn record_yield(&mut self, disposition: YieldTo) -> Result<(), SpeakersListError> {
        match &mut self.yield_log {
            Some(log) => {
                log.push(disposition);
                Ok(())
            }
            None => Err(SpeakersListError::YieldNotAllowed),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn single_secs(&self) -> u32 {
        self.single_secs
    }

    pub fn total_secs(&self) -> u32 {
        self.total_secs
    }

    /// Position of the speaking marker
    pub fn current(&self) -> usize {
        self.current
    }

    /// The nation under the marker, if the marker is on the roster
    pub fn current_nation(&self) -> Option<&Nation> {
        self.nations.get(self.current)
    }

    pub fn nations(&self) -> &NationList {
        &self.nations
    }

    pub fn len(&self) -> usize {
        self.nations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nations.is_empty()
    }

    pub fn spoken_log(&self) -> &[u32] {
        &self.spoken_log
    }

    pub fn yields_allowed(&self) -> bool {
        self.yield_log.is_some()
    }

    pub fn yield_log(&self) -> Option<&[YieldTo]> {
        self.yield_log.as_deref()
    }
}

// =============================================================================
// TESTS
// =============================================================================
