//! fracsack: a greedy fractional knapsack allocator built for replay.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all fracsack sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use fracsack::prelude::*;
//!
//! let items = [
//!     Item::new(1, 10.0, 60.0),
//!     Item::new(2, 20.0, 100.0),
//!     Item::new(3, 30.0, 120.0),
//! ];
//! let solution = solve(&items, 50.0).unwrap();
//! assert_eq!(solution.steps().len(), 3);
//! assert_eq!(solution.outcome(ItemId(3)).map(|o| o.fraction() < 1.0), Some(true));
//!
//! // Replay at 2x.
//! let config = PlaybackConfig::with_speed(Speed::from_index(3).unwrap());
//! let mut playback = Playback::new(&solution, &config).unwrap();
//! let first = playback.next_cue().unwrap();
//! assert_eq!(first.step.id(), ItemId(1));
//! assert_eq!(first.drop_duration.as_millis(), 750);
//!
//! let log = Narrator.transcript(&solution);
//! assert_eq!(log.last().unwrap().message, "Algorithm Finished! Total Value: 240.00");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `fracsack-core` | `ItemId`, `Item`, `RankedItem`, `SolveError` |
//! | [`solver`] | `fracsack-solver` | `solve`, steps, allocations, `Solution` |
//! | [`playback`] | `fracsack-playback` | Session config, cue cursor, narration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core item types and errors (`fracsack-core`).
pub use fracsack_core as types;

/// The greedy allocator and its result types (`fracsack-solver`).
pub use fracsack_solver as solver;

/// Playback session, cue cursor and narration (`fracsack-playback`).
pub use fracsack_playback as playback;

pub use fracsack_solver::solve;

/// Common imports for typical fracsack usage.
///
/// ```rust
/// use fracsack::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use fracsack_core::{Item, ItemId, RankedItem, SolveError};

    // Solver
    pub use fracsack_solver::{
        solve, Allocation, AllocationStep, Outcome, Solution, SolveSummary, Take,
    };

    // Playback
    pub use fracsack_playback::{
        ConfigError, Cue, Gauge, LogEntry, LogKind, Narrator, Playback, PlaybackConfig, Speed,
    };
}
