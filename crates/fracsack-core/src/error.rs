//! Error types for the fracsack allocator.
//!
//! The allocator is a pure computation, so the only failure class is
//! rejected input. Every variant carries the offending value so the
//! caller can point at the field that needs fixing.

use std::error::Error;
use std::fmt;

use crate::id::ItemId;

/// Input rejected by `solve()` before any allocation takes place.
///
/// Items are checked in input order and the first violation wins.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveError {
    /// Capacity is NaN, infinite, or negative.
    InvalidCapacity {
        /// The rejected capacity.
        value: f64,
    },
    /// An item carries the reserved id `0`.
    InvalidItemId {
        /// Position of the item in the input slice.
        index: usize,
    },
    /// Two items share the same id.
    DuplicateItemId {
        /// The id seen more than once.
        id: ItemId,
    },
    /// An item weight is NaN, infinite, zero, or negative.
    InvalidWeight {
        /// The item with the bad weight.
        id: ItemId,
        /// The rejected weight.
        value: f64,
    },
    /// An item value is NaN, infinite, or negative.
    InvalidValue {
        /// The item with the bad value.
        id: ItemId,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity { value } => {
                write!(f, "capacity must be finite and non-negative, got {value}")
            }
            Self::InvalidItemId { index } => {
                write!(f, "item at index {index} has reserved id 0")
            }
            Self::DuplicateItemId { id } => write!(f, "duplicate item id {id}"),
            Self::InvalidWeight { id, value } => {
                write!(f, "item {id}: weight must be finite and positive, got {value}")
            }
            Self::InvalidValue { id, value } => {
                write!(f, "item {id}: value must be finite and non-negative, got {value}")
            }
        }
    }
}

impl Error for SolveError {}
