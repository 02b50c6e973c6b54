//! Presentation-side contracts for replaying a fracsack [`Solution`].
//!
//! The solver knows nothing about time. This crate turns a finished
//! [`Solution`] into a finite, restartable list of [`Cue`]s whose
//! durations are derived from a caller-owned [`PlaybackConfig`], and
//! renders the human-readable log a visualizer shows next to the sack.
//! Nothing here sleeps or schedules; the presenter drives the clock.
//!
//! [`Solution`]: fracsack_solver::Solution

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod cue;
pub mod narration;
pub mod playback;

pub use config::{ConfigError, PlaybackConfig, Speed};
pub use cue::{Cue, Gauge};
pub use narration::{LogEntry, LogKind, Narrator};
pub use playback::Playback;
