//! Items offered to the allocator and their ranked per-run copies.

use crate::error::SolveError;
use crate::id::ItemId;

/// An item the caller offers for packing.
///
/// Items are plain immutable inputs. The allocator never writes to
/// them; the value density it sorts by lives on [`RankedItem`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Item {
    /// Caller-assigned identifier, unique within one solve.
    pub id: ItemId,
    /// Full weight of the item. Must be finite and positive.
    pub weight: f64,
    /// Full value of the item. Must be finite and non-negative.
    pub value: f64,
}

impl Item {
    /// Create an item from a raw id, weight and value.
    pub fn new(id: u32, weight: f64, value: f64) -> Self {
        Self {
            id: ItemId(id),
            weight,
            value,
        }
    }

    /// Value per unit of weight.
    ///
    /// Only meaningful once [`validate`](Self::validate) has passed;
    /// a zero weight yields an infinite or NaN ratio.
    pub fn ratio(&self) -> f64 {
        self.value / self.weight
    }

    /// Check the weight and value of this item.
    ///
    /// The id is checked by the solver, which also knows the item's
    /// position and the other ids in the batch.
    pub fn validate(&self) -> Result<(), SolveError> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(SolveError::InvalidWeight {
                id: self.id,
                value: self.weight,
            });
        }
        if !self.value.is_finite() || self.value < 0.0 {
            return Err(SolveError::InvalidValue {
                id: self.id,
                value: self.value,
            });
        }
        Ok(())
    }
}

/// A copy of an [`Item`] carrying the ratio computed for one solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankedItem {
    /// The original item, copied.
    pub item: Item,
    /// `item.value / item.weight`, computed once.
    pub ratio: f64,
}

impl RankedItem {
    /// Rank an item by computing its ratio.
    pub fn new(item: Item) -> Self {
        Self {
            ratio: item.ratio(),
            item,
        }
    }

    /// Shorthand for `self.item.id`.
    pub fn id(&self) -> ItemId {
        self.item.id
    }
}

impl From<Item> for RankedItem {
    fn from(item: Item) -> Self {
        Self::new(item)
    }
}
