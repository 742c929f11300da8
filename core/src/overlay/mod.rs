//! Temporary player classifications.
//!
//! The store is the only mutable state of the classification core. It is
//! driven by user commands and read by the status aggregator.

mod store;

pub use store::{AddOutcome, OverlayStore, TempEntry, TempFlags};
