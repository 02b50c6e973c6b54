//! Finite, restartable cursor over a solution's steps.

use std::time::Duration;

use fracsack_core::ItemId;
use fracsack_solver::Solution;
use tracing::debug;

use crate::config::{ConfigError, PlaybackConfig};
use crate::cue::{Cue, Gauge};

/// Replays a [`Solution`] one [`Cue`] at a time.
///
/// All cues are computed up front from the solution and the session
/// config, so the cursor can be rewound and replayed any number of
/// times with identical output. The presenter decides when to ask for
/// the next cue; nothing here waits.
#[derive(Clone, Debug)]
pub struct Playback {
    cues: Vec<Cue>,
    not_taken: Vec<ItemId>,
    capacity: f64,
    position: usize,
}

impl Playback {
    /// Build the cue list for `solution` under `config`.
    pub fn new(solution: &Solution, config: &PlaybackConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let drop_duration = config.speed.scale(config.drop_base);
        let travel_duration = drop_duration.mul_f64(config.travel_share);
        let pause_duration = config.speed.scale(config.pause_base);
        let capacity = solution.capacity();

        let cues = solution
            .steps()
            .iter()
            .enumerate()
            .map(|(index, step)| Cue {
                index,
                step: *step,
                drop_duration,
                travel_duration,
                settle_duration: config.settle,
                pause_duration,
                segment_percent: if capacity > 0.0 {
                    step.weight_taken / capacity * 100.0
                } else {
                    0.0
                },
                gauge: Gauge {
                    value: step.total_value,
                    weight: step.total_weight,
                    capacity,
                },
            })
            .collect::<Vec<_>>();

        debug!(
            cues = cues.len(),
            speed = config.speed.multiplier(),
            "playback prepared"
        );
        Ok(Self {
            cues,
            not_taken: solution.not_taken(),
            capacity,
            position: 0,
        })
    }

    /// The next cue, or `None` once every step has played.
    pub fn next_cue(&mut self) -> Option<Cue> {
        let cue = self.cues.get(self.position).copied()?;
        self.position += 1;
        Some(cue)
    }

    /// The cue `next_cue` would return, without advancing.
    pub fn peek(&self) -> Option<&Cue> {
        self.cues.get(self.position)
    }

    /// Start over from the first cue.
    pub fn rewind(&mut self) {
        debug!(from = self.position, "playback rewound");
        self.position = 0;
    }

    /// Number of cues already played.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total number of cues.
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// `true` if the solution had no steps.
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// `true` once every cue has played.
    pub fn is_finished(&self) -> bool {
        self.position >= self.cues.len()
    }

    /// Cues not yet played.
    pub fn remaining(&self) -> &[Cue] {
        &self.cues[self.position.min(self.cues.len())..]
    }

    /// Every cue, played or not.
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// Items to mark "not taken" after the last cue, in input order.
    pub fn not_taken(&self) -> &[ItemId] {
        &self.not_taken
    }

    /// The gauge as of the current position.
    pub fn gauge(&self) -> Gauge {
        self.position
            .checked_sub(1)
            .and_then(|i| self.cues.get(i))
            .map_or(Gauge::empty(self.capacity), |c| c.gauge)
    }

    /// Wall time of the whole playback.
    pub fn total_duration(&self) -> Duration {
        self.cues.iter().map(Cue::elapsed).sum()
    }
}

impl Iterator for Playback {
    type Item = Cue;

    fn next(&mut self) -> Option<Cue> {
        self.next_cue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.cues.len().saturating_sub(self.position);
        (n, Some(n))
    }
}
