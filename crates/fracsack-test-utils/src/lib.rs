//! Test fixtures and seeded generators for fracsack development.
//!
//! [`fixtures`] holds small hand-written batches with known answers.
//! [`generate`] builds reproducible random batches for property tests
//! and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod generate;

pub use fixtures::Fixture;
pub use generate::{random_capacity, random_items, random_items_in, ItemRanges};
