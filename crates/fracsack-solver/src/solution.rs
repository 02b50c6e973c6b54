//! The immutable result of one solve and the views derived from it.

use fracsack_core::ItemId;
use indexmap::IndexMap;

use crate::allocation::{Allocation, AllocationStep, Take};

/// What happened to one input item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    /// The whole item went into the sack.
    Full,
    /// Part of the item went into the sack.
    Partial {
        /// Share taken, in `(0, 1)`.
        fraction: f64,
    },
    /// The sack was full before this item's turn.
    NotTaken,
}

impl Outcome {
    /// Share of the item taken; zero when not taken.
    pub fn fraction(&self) -> f64 {
        match self {
            Self::Full => 1.0,
            Self::Partial { fraction } => *fraction,
            Self::NotTaken => 0.0,
        }
    }
}

/// Aggregate counters over a [`Solution`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SolveSummary {
    /// Items taken whole.
    pub full: usize,
    /// Items split (zero or one).
    pub partial: usize,
    /// Items left out.
    pub not_taken: usize,
    /// Weight in the sack.
    pub total_weight: f64,
    /// Value in the sack.
    pub total_value: f64,
    /// `total_weight / capacity`, or zero for a zero capacity.
    pub utilization: f64,
}

/// Ordered record of a greedy solve.
///
/// Steps are in processing order (ratio descending, ties in input
/// order). Allocations mirror the steps one to one. A `Solution` is
/// built once per [`solve`](crate::solve) call and never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    steps: Vec<AllocationStep>,
    allocations: Vec<Allocation>,
    total_value: f64,
    capacity: f64,
    item_ids: Vec<ItemId>,
    /// Input id to the position of its step, `None` if not taken.
    step_index: IndexMap<ItemId, Option<usize>>,
}

impl Solution {
    pub(crate) fn new(steps: Vec<AllocationStep>, capacity: f64, item_ids: Vec<ItemId>) -> Self {
        let allocations = steps.iter().map(Allocation::from).collect();
        let total_value = steps.last().map_or(0.0, |s| s.total_value);
        let mut step_index: IndexMap<ItemId, Option<usize>> =
            item_ids.iter().map(|id| (*id, None)).collect();
        for (i, step) in steps.iter().enumerate() {
            step_index.insert(step.id(), Some(i));
        }
        Self {
            steps,
            allocations,
            total_value,
            capacity,
            item_ids,
            step_index,
        }
    }

    /// Greedy decisions with running totals.
    pub fn steps(&self) -> &[AllocationStep] {
        &self.steps
    }

    /// Summary form of [`steps`](Self::steps).
    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    /// Value in the sack after the last step.
    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    /// Weight in the sack after the last step.
    pub fn total_weight(&self) -> f64 {
        self.steps.last().map_or(0.0, |s| s.total_weight)
    }

    /// The capacity this solution was computed for.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Ids of every input item, in input order.
    pub fn item_ids(&self) -> &[ItemId] {
        &self.item_ids
    }

    /// `true` if nothing was taken.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The split step, if the pass ended on a partial take.
    pub fn split_step(&self) -> Option<&AllocationStep> {
        self.steps.last().filter(|s| s.take() == Take::Partial)
    }

    /// Ids taken, in processing order.
    pub fn taken_ids(&self) -> Vec<ItemId> {
        self.steps.iter().map(AllocationStep::id).collect()
    }

    /// Ids of input items absent from the steps, in input order.
    pub fn not_taken(&self) -> Vec<ItemId> {
        self.step_index
            .iter()
            .filter(|(_, step)| step.is_none())
            .map(|(id, _)| *id)
            .collect()
    }

    /// The step that took from `id`, if any.
    pub fn step_for(&self, id: ItemId) -> Option<&AllocationStep> {
        self.step_index
            .get(&id)
            .copied()
            .flatten()
            .and_then(|i| self.steps.get(i))
    }

    /// Outcome for one item, or `None` if `id` was not an input.
    pub fn outcome(&self, id: ItemId) -> Option<Outcome> {
        let step = self.step_index.get(&id)?;
        Some(step.and_then(|i| self.steps.get(i)).map_or(Outcome::NotTaken, outcome_of))
    }

    /// Outcome of every input item, keyed by id in input order.
    pub fn outcomes(&self) -> IndexMap<ItemId, Outcome> {
        self.step_index
            .iter()
            .map(|(id, step)| {
                let outcome = step
                    .and_then(|i| self.steps.get(i))
                    .map_or(Outcome::NotTaken, outcome_of);
                (*id, outcome)
            })
            .collect()
    }

    /// Count full, partial and skipped items and report utilization.
    pub fn summary(&self) -> SolveSummary {
        let partial = usize::from(self.split_step().is_some());
        let total_weight = self.total_weight();
        SolveSummary {
            full: self.steps.len() - partial,
            partial,
            not_taken: self.item_ids.len() - self.steps.len(),
            total_weight,
            total_value: self.total_value,
            utilization: if self.capacity > 0.0 {
                total_weight / self.capacity
            } else {
                0.0
            },
        }
    }
}

fn outcome_of(step: &AllocationStep) -> Outcome {
    match step.take() {
        Take::Full => Outcome::Full,
        Take::Partial => Outcome::Partial {
            fraction: step.fraction,
        },
    }
}
