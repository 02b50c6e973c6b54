//! Per-decision records emitted by the greedy pass.

use std::fmt;

use fracsack_core::{ItemId, RankedItem};

/// Whether a step took its item whole or split it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Take {
    /// The whole item fit (`fraction == 1`).
    Full,
    /// Only part of the item fit. At most one step per solution.
    Partial,
}

impl fmt::Display for Take {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::Partial => write!(f, "partial"),
        }
    }
}

/// One greedy decision and the sack totals right after it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AllocationStep {
    /// The ranked copy of the item this step took from.
    pub item: RankedItem,
    /// Share of the item taken, in `(0, 1]`.
    pub fraction: f64,
    /// `item.weight * fraction`.
    pub weight_taken: f64,
    /// `item.value * fraction`.
    pub value_gained: f64,
    /// Cumulative weight in the sack after this step.
    pub total_weight: f64,
    /// Cumulative value in the sack after this step.
    pub total_value: f64,
}

impl AllocationStep {
    /// Id of the item taken.
    pub fn id(&self) -> ItemId {
        self.item.id()
    }

    /// Classify this step as a full or partial take.
    pub fn take(&self) -> Take {
        if self.fraction >= 1.0 {
            Take::Full
        } else {
            Take::Partial
        }
    }

    /// Project this step onto its summary form.
    pub fn allocation(&self) -> Allocation {
        Allocation {
            id: self.id(),
            weight_taken: self.weight_taken,
            item_weight: self.item.item.weight,
            value_gained: self.value_gained,
            fraction: self.fraction,
        }
    }
}

/// Summary form of an [`AllocationStep`] without running totals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Allocation {
    /// Id of the item taken.
    pub id: ItemId,
    /// Weight placed in the sack.
    pub weight_taken: f64,
    /// The item's full weight.
    pub item_weight: f64,
    /// Value gained from the taken portion.
    pub value_gained: f64,
    /// Share of the item taken, in `(0, 1]`.
    pub fraction: f64,
}

impl From<&AllocationStep> for Allocation {
    fn from(step: &AllocationStep) -> Self {
        step.allocation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fracsack_core::Item;

    fn step(fraction: f64) -> AllocationStep {
        let item = RankedItem::new(Item::new(3, 30.0, 120.0));
        AllocationStep {
            item,
            fraction,
            weight_taken: 30.0 * fraction,
            value_gained: 120.0 * fraction,
            total_weight: 50.0,
            total_value: 240.0,
        }
    }

    #[test]
    fn take_follows_fraction() {
        assert_eq!(step(1.0).take(), Take::Full);
        assert_eq!(step(0.5).take(), Take::Partial);
        assert_eq!(Take::Partial.to_string(), "partial");
    }

    #[test]
    fn allocation_drops_running_totals() {
        let s = step(0.5);
        let a = Allocation::from(&s);
        assert_eq!(a.id, ItemId(3));
        assert_eq!(a.weight_taken, 15.0);
        assert_eq!(a.item_weight, 30.0);
        assert_eq!(a.value_gained, 60.0);
        assert_eq!(a.fraction, 0.5);
    }
}
