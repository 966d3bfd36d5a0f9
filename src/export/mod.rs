//! Export pipelines
//!
//! Serializes in-memory collections to semicolon-delimited CSV (UTF-8 with
//! byte-order mark) or single-sheet XLSX workbooks with fixed column labels
//! and widths. Exporting an empty collection is not an error.

pub mod csv;
pub mod xlsx;

pub use csv::{export_demandes_csv, export_depenses_csv, export_operations_csv};
pub use xlsx::{export_demandes_xlsx, export_depenses_xlsx, export_operations_xlsx};

use chrono::Local;

/// Canonical demande column labels, in export order
pub const DEMANDE_LABELS: [&str; 9] = [
    "Service",
    "Domaine",
    "Catégorie",
    "Description",
    "Justification",
    "Budget titre",
    "Budget validé",
    "Statut",
    "Date création",
];

/// Canonical dépense column labels, in export order
pub const DEPENSE_LABELS: [&str; 6] = [
    "Service",
    "Opération",
    "Date",
    "Description",
    "Montant TTC",
    "Fournisseur",
];

/// Canonical opération column labels, in export order
pub const OPERATION_LABELS: [&str; 6] = [
    "Nom",
    "Description",
    "Budget prévu",
    "Dépenses",
    "Période",
    "Statut",
];

/// Default export filename: `<entity-type>_<ISO-date>.<ext>`
pub fn export_filename(entity: &str, extension: &str) -> String {
    format!(
        "{}_{}.{}",
        entity,
        Local::now().date_naive(),
        extension
    )
}

/// Format an amount for export: integral values without a decimal part,
/// fractional values with the dot the importer reads back.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{}", amount as i64)
    } else {
        format!("{}", amount)
    }
}
