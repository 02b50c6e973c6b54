//! One presentation event per allocation step.

use std::time::Duration;

use fracsack_solver::AllocationStep;

/// Sack totals shown next to the animation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Gauge {
    /// Value in the sack.
    pub value: f64,
    /// Weight in the sack.
    pub weight: f64,
    /// Sack capacity.
    pub capacity: f64,
}

impl Gauge {
    /// An empty sack of the given capacity.
    pub fn empty(capacity: f64) -> Self {
        Self {
            value: 0.0,
            weight: 0.0,
            capacity,
        }
    }

    /// How full the sack is, in percent. Zero for a zero capacity.
    pub fn percent(&self) -> f64 {
        if self.capacity > 0.0 {
            self.weight / self.capacity * 100.0
        } else {
            0.0
        }
    }
}

/// A step together with the timings the presenter should use for it.
///
/// The presenter moves the item for `travel_duration`, lets it land
/// and fade for `settle_duration`, then waits `pause_duration` before
/// the next cue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cue {
    /// Position of this cue in the playback, from zero.
    pub index: usize,
    /// The decision being shown.
    pub step: AllocationStep,
    /// Nominal drop length at the session speed.
    pub drop_duration: Duration,
    /// Part of the drop spent travelling to the sack.
    pub travel_duration: Duration,
    /// Fade-out after landing.
    pub settle_duration: Duration,
    /// Wait after the drop before the next cue.
    pub pause_duration: Duration,
    /// Height of this item's slice of the sack, in percent of capacity.
    pub segment_percent: f64,
    /// Sack totals once this cue has played.
    pub gauge: Gauge,
}

impl Cue {
    /// Wall time this cue occupies: travel, settle, then pause.
    pub fn elapsed(&self) -> Duration {
        self.travel_duration + self.settle_duration + self.pause_duration
    }
}
