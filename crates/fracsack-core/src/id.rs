//! Strongly-typed item identifier.

use std::fmt;

/// Identifies an item offered to the allocator.
///
/// Ids are assigned by the caller. The input collector numbers items
/// from 1 in the order they were entered, so `ItemId(0)` is never a
/// valid id and is rejected by validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Returns `true` if this id is usable as a caller-assigned id.
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ItemId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_a_valid_id() {
        assert!(!ItemId(0).is_valid());
        assert!(ItemId(1).is_valid());
        assert!(ItemId(u32::MAX).is_valid());
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(ItemId(7).to_string(), "7");
        assert_eq!(ItemId::from(12).to_string(), "12");
    }
}
