//! Input validation, ranking, and the greedy fill.

use std::collections::HashSet;

use fracsack_core::{Item, RankedItem, SolveError};
use tracing::{debug, trace};

use crate::allocation::AllocationStep;
use crate::solution::Solution;

/// Check a batch of items and a capacity without solving.
///
/// Capacity is checked first, then each item in input order: id, then
/// uniqueness, then weight and value. The first violation is returned.
pub fn validate_input(items: &[Item], capacity: f64) -> Result<(), SolveError> {
    if !capacity.is_finite() || capacity < 0.0 {
        return Err(SolveError::InvalidCapacity { value: capacity });
    }
    let mut seen = HashSet::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if !item.id.is_valid() {
            return Err(SolveError::InvalidItemId { index });
        }
        if !seen.insert(item.id) {
            return Err(SolveError::DuplicateItemId { id: item.id });
        }
        item.validate()?;
    }
    Ok(())
}

/// Copy items and order them by ratio, highest first.
///
/// The sort is stable: items with equal ratios keep their input order.
/// Callers must have validated the items, otherwise NaN ratios sort
/// ahead of everything else.
pub fn rank(items: &[Item]) -> Vec<RankedItem> {
    let mut ranked: Vec<RankedItem> = items.iter().copied().map(RankedItem::new).collect();
    ranked.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
    ranked
}

/// Solve the fractional knapsack problem greedily.
///
/// Items are ranked by value density and taken whole while they fit;
/// the first item that does not fit is split to fill the remaining
/// capacity exactly, and the pass ends. A capacity of zero or an empty
/// batch yields an empty [`Solution`].
///
/// # Errors
///
/// Returns [`SolveError`] if the capacity or any item fails
/// [`validate_input`]. Nothing is allocated in that case.
///
/// # Examples
///
/// ```
/// use fracsack_core::{Item, ItemId};
/// use fracsack_solver::solve;
///
/// let items = [
///     Item::new(1, 10.0, 60.0),
///     Item::new(2, 20.0, 100.0),
///     Item::new(3, 30.0, 120.0),
/// ];
/// let solution = solve(&items, 50.0)?;
/// assert_eq!(solution.total_value(), 240.0);
/// assert_eq!(solution.split_step().map(|s| s.id()), Some(ItemId(3)));
/// # Ok::<(), fracsack_core::SolveError>(())
/// ```
pub fn solve(items: &[Item], capacity: f64) -> Result<Solution, SolveError> {
    validate_input(items, capacity)?;
    debug!(items = items.len(), capacity, "solving fractional knapsack");

    let ranked = rank(items);
    let mut steps = Vec::with_capacity(ranked.len());
    let mut total_weight = 0.0_f64;
    let mut total_value = 0.0_f64;

    for item in ranked {
        if total_weight >= capacity {
            break;
        }
        let remaining = capacity - total_weight;
        let weight = item.item.weight;

        let (fraction, weight_taken) = if weight <= remaining {
            (1.0, weight)
        } else {
            (remaining / weight, remaining)
        };
        // Underflow on a vanishing remainder; nothing left worth taking.
        if fraction <= 0.0 {
            break;
        }

        let value_gained = if fraction < 1.0 {
            item.item.value * fraction
        } else {
            item.item.value
        };
        total_weight = if fraction < 1.0 {
            capacity
        } else {
            (total_weight + weight_taken).min(capacity)
        };
        total_value += value_gained;

        trace!(
            id = item.id().0,
            ratio = item.ratio,
            fraction,
            weight_taken,
            value_gained,
            total_weight,
            total_value,
            "took item"
        );
        steps.push(AllocationStep {
            item,
            fraction,
            weight_taken,
            value_gained,
            total_weight,
            total_value,
        });
    }

    debug!(
        steps = steps.len(),
        total_weight, total_value, "greedy pass finished"
    );
    Ok(Solution::new(
        steps,
        capacity,
        items.iter().map(|item| item.id).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fracsack_core::ItemId;

    fn ids(ranked: &[RankedItem]) -> Vec<u32> {
        ranked.iter().map(|r| r.id().0).collect()
    }

    #[test]
    fn rank_orders_by_ratio_descending() {
        let items = [
            Item::new(1, 30.0, 120.0),
            Item::new(2, 10.0, 60.0),
            Item::new(3, 20.0, 100.0),
        ];
        let ranked = rank(&items);
        assert_eq!(ids(&ranked), vec![2, 3, 1]);
        assert_eq!(ranked[0].ratio, 6.0);
    }

    #[test]
    fn rank_keeps_input_order_on_ties() {
        let items = [
            Item::new(4, 2.0, 4.0),
            Item::new(2, 1.0, 2.0),
            Item::new(9, 5.0, 50.0),
            Item::new(1, 3.0, 6.0),
        ];
        assert_eq!(ids(&rank(&items)), vec![9, 4, 2, 1]);
    }

    #[test]
    fn rank_leaves_input_untouched() {
        let items = vec![Item::new(1, 1.0, 1.0), Item::new(2, 1.0, 5.0)];
        let before = items.clone();
        let _ = rank(&items);
        assert_eq!(items, before);
    }

    #[test]
    fn validate_rejects_bad_capacity() {
        for c in [-1.0, f64::NAN, f64::INFINITY] {
            match validate_input(&[], c) {
                Err(SolveError::InvalidCapacity { .. }) => {}
                other => panic!("expected InvalidCapacity for {c}, got {other:?}"),
            }
        }
        assert!(validate_input(&[], 0.0).is_ok());
    }

    #[test]
    fn validate_rejects_zero_id_with_index() {
        let items = [Item::new(1, 1.0, 1.0), Item::new(0, 1.0, 1.0)];
        assert_eq!(
            validate_input(&items, 5.0),
            Err(SolveError::InvalidItemId { index: 1 })
        );
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let items = [
            Item::new(1, 1.0, 1.0),
            Item::new(2, 1.0, 1.0),
            Item::new(1, 2.0, 3.0),
        ];
        assert_eq!(
            validate_input(&items, 5.0),
            Err(SolveError::DuplicateItemId { id: ItemId(1) })
        );
    }

    #[test]
    fn validate_reports_first_violation() {
        let items = [Item::new(1, 0.0, 1.0), Item::new(2, 1.0, -1.0)];
        assert_eq!(
            validate_input(&items, 5.0),
            Err(SolveError::InvalidWeight {
                id: ItemId(1),
                value: 0.0
            })
        );
    }

    #[test]
    fn solve_rejects_before_allocating() {
        let items = [Item::new(1, 10.0, 60.0), Item::new(2, -3.0, 1.0)];
        assert!(matches!(
            solve(&items, 50.0),
            Err(SolveError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn classic_three_items() {
        let items = [
            Item::new(1, 10.0, 60.0),
            Item::new(2, 20.0, 100.0),
            Item::new(3, 30.0, 120.0),
        ];
        let s = solve(&items, 50.0).unwrap();
        let steps = s.steps();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].fraction, 1.0);
        assert_eq!(steps[1].fraction, 1.0);
        assert!((steps[2].fraction - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(steps[2].weight_taken, 20.0);
        assert!((steps[2].value_gained - 80.0).abs() < 1e-9);
        assert_eq!(steps[2].total_weight, 50.0);
        assert!((s.total_value() - 240.0).abs() < 1e-9);
    }

    #[test]
    fn zero_capacity_is_empty() {
        let items = [Item::new(1, 10.0, 60.0)];
        let s = solve(&items, 0.0).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.total_value(), 0.0);
        assert_eq!(s.not_taken(), vec![ItemId(1)]);
    }

    #[test]
    fn single_light_item_leaves_capacity_unused() {
        let s = solve(&[Item::new(1, 5.0, 10.0)], 100.0).unwrap();
        assert_eq!(s.steps().len(), 1);
        assert_eq!(s.steps()[0].fraction, 1.0);
        assert_eq!(s.total_value(), 10.0);
        assert_eq!(s.total_weight(), 5.0);
    }

    #[test]
    fn empty_batch_is_empty() {
        let s = solve(&[], 50.0).unwrap();
        assert!(s.is_empty());
        assert!(s.allocations().is_empty());
        assert_eq!(s.total_value(), 0.0);
    }

    #[test]
    fn stops_after_exact_fit() {
        let items = [
            Item::new(1, 25.0, 100.0),
            Item::new(2, 25.0, 50.0),
            Item::new(3, 10.0, 1.0),
        ];
        let s = solve(&items, 50.0).unwrap();
        assert_eq!(s.steps().len(), 2);
        assert!(s.split_step().is_none());
        assert_eq!(s.not_taken(), vec![ItemId(3)]);
    }

    #[test]
    fn zero_value_items_still_fill_capacity() {
        let items = [Item::new(1, 4.0, 8.0), Item::new(2, 4.0, 0.0)];
        let s = solve(&items, 6.0).unwrap();
        assert_eq!(s.steps().len(), 2);
        assert_eq!(s.steps()[1].value_gained, 0.0);
        assert_eq!(s.total_weight(), 6.0);
        assert_eq!(s.total_value(), 8.0);
    }
}
