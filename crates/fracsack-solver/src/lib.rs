//! Greedy allocator for the fractional knapsack problem.
//!
//! [`solve`] ranks items by value density, then fills the capacity in
//! one forward pass, splitting at most one item. The returned
//! [`Solution`] is an immutable, ordered record of every decision with
//! running totals, suitable for replay by a presentation layer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod allocation;
pub mod greedy;
pub mod solution;

pub use allocation::{Allocation, AllocationStep, Take};
pub use greedy::{rank, solve, validate_input};
pub use solution::{Outcome, Solution, SolveSummary};
