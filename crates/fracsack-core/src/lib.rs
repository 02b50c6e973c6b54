//! Core types for the fracsack fractional knapsack allocator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the item model shared by the solver and the playback layer:
//! identifiers, items, their ranked per-run copies, and the error type
//! reported when input is rejected.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod item;

pub use error::SolveError;
pub use id::ItemId;
pub use item::{Item, RankedItem};
