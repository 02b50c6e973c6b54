//! Hand-written item batches with known greedy answers.
//!
//! - [`classic_three`] — the textbook case, ends on a split.
//! - [`single_light`] — one item far below capacity.
//! - [`equal_ratios`] — every item has ratio 2; order must follow input.
//! - [`overflowing`] — first-ranked item alone exceeds capacity.
//! - [`exact_fit`] — whole items fill capacity exactly, leaving one out.

use fracsack_core::Item;

/// A batch of items, a capacity, and the expected total value.
#[derive(Clone, Debug)]
pub struct Fixture {
    pub items: Vec<Item>,
    pub capacity: f64,
    pub expected_value: f64,
}

pub fn classic_three() -> Fixture {
    Fixture {
        items: vec![
            Item::new(1, 10.0, 60.0),
            Item::new(2, 20.0, 100.0),
            Item::new(3, 30.0, 120.0),
        ],
        capacity: 50.0,
        expected_value: 240.0,
    }
}

pub fn single_light() -> Fixture {
    Fixture {
        items: vec![Item::new(1, 5.0, 10.0)],
        capacity: 100.0,
        expected_value: 10.0,
    }
}

pub fn equal_ratios() -> Fixture {
    Fixture {
        items: vec![
            Item::new(3, 4.0, 8.0),
            Item::new(1, 2.0, 4.0),
            Item::new(2, 6.0, 12.0),
        ],
        capacity: 9.0,
        expected_value: 18.0,
    }
}

pub fn overflowing() -> Fixture {
    Fixture {
        items: vec![Item::new(1, 10.0, 5.0), Item::new(2, 100.0, 400.0)],
        capacity: 25.0,
        expected_value: 100.0,
    }
}

pub fn exact_fit() -> Fixture {
    Fixture {
        items: vec![
            Item::new(1, 25.0, 100.0),
            Item::new(2, 25.0, 50.0),
            Item::new(3, 10.0, 1.0),
        ],
        capacity: 50.0,
        expected_value: 150.0,
    }
}

/// Every fixture above, for table-driven tests.
pub fn all() -> Vec<(&'static str, Fixture)> {
    vec![
        ("classic_three", classic_three()),
        ("single_light", single_light()),
        ("equal_ratios", equal_ratios()),
        ("overflowing", overflowing()),
        ("exact_fit", exact_fit()),
    ]
}
