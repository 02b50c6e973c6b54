//! Benchmark profiles for the fracsack allocator.
//!
//! - [`reference_profile`]: 1K items, capacity at half the total weight
//! - [`stress_profile`]: 100K items, same capacity rule
//! - [`tied_profile`]: 10K items sharing one ratio, exercising the stable sort

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use fracsack_core::Item;
use fracsack_test_utils::random_items;

/// A batch of items and the capacity to solve it for.
pub struct Profile {
    /// Items in input order.
    pub items: Vec<Item>,
    /// Sack capacity.
    pub capacity: f64,
}

fn half_filled(items: Vec<Item>) -> Profile {
    let capacity = items.iter().map(|i| i.weight).sum::<f64>() / 2.0;
    Profile { items, capacity }
}

/// 1K seeded items; capacity is half their total weight.
pub fn reference_profile(seed: u64) -> Profile {
    half_filled(random_items(seed, 1_000))
}

/// 100K seeded items; capacity is half their total weight.
pub fn stress_profile(seed: u64) -> Profile {
    half_filled(random_items(seed, 100_000))
}

/// 10K items with ratio 2 and weights cycling through 1..=7.
pub fn tied_profile() -> Profile {
    let items = (1..=10_000u32)
        .map(|id| {
            let weight = f64::from(id % 7 + 1);
            Item::new(id, weight, weight * 2.0)
        })
        .collect();
    half_filled(items)
}
