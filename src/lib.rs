//! Budget Pro - Command-line municipal budget management
//!
//! This library provides the core functionality for Budget Pro, a budget
//! management tool for small municipalities: budget requests (demandes),
//! expenses (dépenses), multi-year capital operations, budget campaigns,
//! services, and users.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (demandes, dépenses, opérations, etc.)
//! - `storage`: JSON file entity store with one collection per entity type
//! - `import`: Tolerant CSV/XLSX import pipeline (header aliases, locale
//!   amount parsing, service-name normalization)
//! - `export`: CSV and XLSX export with fixed column labels
//! - `services`: Business logic layer
//! - `display`: Terminal table formatting
//! - `cli`: Command handlers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
