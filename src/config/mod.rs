//! Configuration for Budget Pro
//!
//! Path resolution for the data directory and the per-entity JSON files.

pub mod paths;

pub use paths::BudgetPaths;
