//! Dashboard totals
//!
//! Aggregates recomputed from the current collections on every call:
//! total requested, total validated, total spent, and remaining-to-spend
//! (validated minus spent, which can go negative).

use crate::error::BudgetResult;
use crate::storage::Store;

/// Global budget figures shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub budget_demande: f64,
    pub budget_valide: f64,
    pub total_depenses: f64,
    pub reste_a_depenser: f64,
}

/// Compute the dashboard totals from the stored collections
pub fn compute_totals(store: &Store) -> BudgetResult<Totals> {
    let demandes = store.demandes.list()?;
    let depenses = store.depenses.list()?;

    let budget_demande: f64 = demandes.iter().map(|d| d.budget_titre).sum();
    let budget_valide: f64 = demandes.iter().map(|d| d.budget_valide).sum();
    let total_depenses: f64 = depenses.iter().map(|d| d.montant_ttc).sum();

    Ok(Totals {
        budget_demande,
        budget_valide,
        total_depenses,
        reste_a_depenser: budget_valide - total_depenses,
    })
}
