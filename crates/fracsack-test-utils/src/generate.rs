//! Deterministic random item batches.
//!
//! Uses a seeded ChaCha8 RNG so a failing seed reproduces exactly.

use std::ops::Range;

use fracsack_core::Item;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Integer ranges for generated weights and values (half-open).
#[derive(Clone, Debug)]
pub struct ItemRanges {
    pub weight: Range<u32>,
    pub value: Range<u32>,
}

impl Default for ItemRanges {
    /// The ranges the visualizer's "randomize" button uses.
    fn default() -> Self {
        Self {
            weight: 5..25,
            value: 10..60,
        }
    }
}

/// `n` items with ids `1..=n` drawn from [`ItemRanges::default`].
pub fn random_items(seed: u64, n: usize) -> Vec<Item> {
    random_items_in(seed, n, &ItemRanges::default())
}

/// `n` items with ids `1..=n` drawn from `ranges`.
///
/// # Panics
///
/// Panics if either range is empty.
pub fn random_items_in(seed: u64, n: usize, ranges: &ItemRanges) -> Vec<Item> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (1..=n as u32)
        .map(|id| {
            let weight = rng.gen_range(ranges.weight.clone());
            let value = rng.gen_range(ranges.value.clone());
            Item::new(id, f64::from(weight), f64::from(value))
        })
        .collect()
}

/// A capacity between 10% and 90% of the batch's total weight.
pub fn random_capacity(seed: u64, items: &[Item]) -> f64 {
    let total: f64 = items.iter().map(|i| i.weight).sum();
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);
    total * rng.gen_range(0.1..0.9)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_items() {
        assert_eq!(random_items(7, 20), random_items(7, 20));
        assert_ne!(random_items(7, 20), random_items(8, 20));
    }

    #[test]
    fn items_respect_ranges_and_ids() {
        let items = random_items(42, 100);
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item.id.0 as usize, i + 1);
            assert!((5.0..25.0).contains(&item.weight));
            assert!((10.0..60.0).contains(&item.value));
            assert!(item.validate().is_ok());
        }
    }

    #[test]
    fn capacity_is_within_total() {
        let items = random_items(3, 10);
        let total: f64 = items.iter().map(|i| i.weight).sum();
        let cap = random_capacity(3, &items);
        assert!(cap > 0.0 && cap < total);
    }
}
