//! Business logic services
//!
//! Services borrow the [`Store`](crate::storage::Store) and wrap the
//! repositories with validation, filtering, dashboard aggregation, and the
//! import/export round trips.

pub mod dashboard;
pub mod demande;
pub mod depense;
pub mod operation;

pub use dashboard::{compute_totals, Totals};
pub use demande::{DemandeFilter, DemandeService};
pub use depense::DepenseService;
pub use operation::OperationService;
