//! Playback session configuration, validation, and error types.
//!
//! [`PlaybackConfig`] is owned by the caller and handed to
//! [`Playback::new`](crate::Playback::new), which validates it before
//! deriving any durations.

use std::error::Error;
use std::fmt;
use std::time::Duration;

// ── Speed ─────────────────────────────────────────────────────────

/// Multipliers offered by the speed slider, slowest first.
pub const SPEED_PRESETS: [f64; 5] = [0.25, 0.5, 1.0, 2.0, 4.0];

/// Index into [`SPEED_PRESETS`] used when nothing is chosen (`1x`).
pub const DEFAULT_SPEED_INDEX: usize = 2;

/// Bounds accepted by [`Speed::custom`]. Keeps scaled durations
/// representable.
pub const SPEED_RANGE: (f64, f64) = (0.01, 100.0);

/// Longest accepted base duration.
pub const MAX_BASE_DURATION: Duration = Duration::from_secs(60);

/// Playback speed multiplier. Durations are divided by it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Speed(f64);

impl Speed {
    /// Pick one of the five slider presets.
    pub fn from_index(index: usize) -> Result<Self, ConfigError> {
        SPEED_PRESETS
            .get(index)
            .map(|&m| Self(m))
            .ok_or(ConfigError::SpeedIndexOutOfRange { index })
    }

    /// Any multiplier within [`SPEED_RANGE`].
    pub fn custom(multiplier: f64) -> Result<Self, ConfigError> {
        let (min, max) = SPEED_RANGE;
        if !multiplier.is_finite() || multiplier < min || multiplier > max {
            return Err(ConfigError::InvalidSpeed { value: multiplier });
        }
        Ok(Self(multiplier))
    }

    /// The raw multiplier.
    pub fn multiplier(self) -> f64 {
        self.0
    }

    /// Scale a base duration by this speed.
    pub fn scale(self, base: Duration) -> Duration {
        base.div_f64(self.0)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(SPEED_PRESETS[DEFAULT_SPEED_INDEX])
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

// ── ConfigError ───────────────────────────────────────────────────

/// Errors detected by [`PlaybackConfig::validate()`] and [`Speed`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Slider index beyond the preset table.
    SpeedIndexOutOfRange {
        /// The rejected index.
        index: usize,
    },
    /// Speed multiplier is NaN or outside [`SPEED_RANGE`].
    InvalidSpeed {
        /// The rejected multiplier.
        value: f64,
    },
    /// A base duration that must be non-zero is zero.
    ZeroDuration {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A base duration exceeds [`MAX_BASE_DURATION`].
    DurationTooLong {
        /// Name of the offending field.
        field: &'static str,
    },
    /// `travel_share` is outside `(0, 1]`.
    InvalidTravelShare {
        /// The rejected share.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpeedIndexOutOfRange { index } => write!(
                f,
                "speed index {index} out of range 0..{}",
                SPEED_PRESETS.len()
            ),
            Self::InvalidSpeed { value } => write!(
                f,
                "speed must be within [{}, {}], got {value}",
                SPEED_RANGE.0, SPEED_RANGE.1
            ),
            Self::ZeroDuration { field } => write!(f, "{field} must be non-zero"),
            Self::DurationTooLong { field } => write!(
                f,
                "{field} exceeds {}s",
                MAX_BASE_DURATION.as_secs()
            ),
            Self::InvalidTravelShare { value } => {
                write!(f, "travel_share must be in (0.0, 1.0], got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── PlaybackConfig ────────────────────────────────────────────────

/// Caller-owned session settings for replaying a solution.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackConfig {
    /// Speed multiplier. Default: `1x`.
    pub speed: Speed,
    /// Nominal length of one item drop at `1x`. Default: 1500 ms.
    pub drop_base: Duration,
    /// Pause between drops at `1x`. Default: 500 ms.
    pub pause_base: Duration,
    /// Share of the drop spent travelling to the sack. Default: 0.6.
    pub travel_share: f64,
    /// Fade-out after the item lands. Not speed-scaled. Default: 300 ms.
    pub settle: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed: Speed::default(),
            drop_base: Duration::from_millis(1500),
            pause_base: Duration::from_millis(500),
            travel_share: 0.6,
            settle: Duration::from_millis(300),
        }
    }
}

impl PlaybackConfig {
    /// Default timings at the given speed.
    pub fn with_speed(speed: Speed) -> Self {
        Self {
            speed,
            ..Self::default()
        }
    }

    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Speed is valid by construction.
        // 1. Drop must have a length for the travel phase to exist.
        if self.drop_base.is_zero() {
            return Err(ConfigError::ZeroDuration { field: "drop_base" });
        }
        // 2. Every base at most MAX_BASE_DURATION, so scaling by the
        //    slowest speed cannot overflow Duration.
        for (field, base) in [
            ("drop_base", self.drop_base),
            ("pause_base", self.pause_base),
            ("settle", self.settle),
        ] {
            if base > MAX_BASE_DURATION {
                return Err(ConfigError::DurationTooLong { field });
            }
        }
        // 3. Travel share in (0, 1].
        let share = self.travel_share;
        if !share.is_finite() || share <= 0.0 || share > 1.0 {
            return Err(ConfigError::InvalidTravelShare { value: share });
        }
        Ok(())
    }
}
