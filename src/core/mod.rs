//! Core engines for Gavel

pub mod clock;
pub mod double_timer;
pub mod speakers;
pub mod timer;

pub use clock::SessionClock;
pub use double_timer::{DualCountdown, DualTick};
pub use speakers::{SpeakersList, SpeakersListError};
pub use timer::{Countdown, TickOutcome};
