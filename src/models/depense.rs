//! Dépense model
//!
//! A recorded outflow of money, optionally linked to an operation by name.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::DepenseId;

/// A recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Depense {
    /// Unique identifier
    pub id: DepenseId,

    /// Paying service
    pub service: String,

    /// Free-text link to an operation (empty when unlinked)
    pub operation: String,

    /// Expense date
    pub date: NaiveDate,

    /// What was bought
    pub description: String,

    /// Amount including tax, in euros
    pub montant_ttc: f64,

    /// Supplier name
    pub fournisseur: String,
}

impl Depense {
    /// Create a new dépense with a fresh ID
    pub fn new(
        service: impl Into<String>,
        operation: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
        montant_ttc: f64,
        fournisseur: impl Into<String>,
    ) -> Self {
        Self {
            id: DepenseId::new(),
            service: service.into(),
            operation: operation.into(),
            date,
            description: description.into(),
            montant_ttc,
            fournisseur: fournisseur.into(),
        }
    }

    /// Whether the mandatory fields of the create dialog are filled
    pub fn required_fields_present(&self) -> bool {
        !self.service.trim().is_empty()
            && !self.description.trim().is_empty()
            && self.montant_ttc > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Depense {
        Depense::new(
            "Service Technique",
            "Rénovation église Saint-Martin",
            NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            "Travaux toiture église - Phase 1",
            75000.0,
            "Toitures Picardie",
        )
    }

    #[test]
    fn test_new_depense() {
        let depense = sample();
        assert_eq!(depense.service, "Service Technique");
        assert_eq!(depense.montant_ttc, 75000.0);
    }

    #[test]
    fn test_required_fields() {
        assert!(sample().required_fields_present());

        let mut missing_amount = sample();
        missing_amount.montant_ttc = 0.0;
        assert!(!missing_amount.required_fields_present());

        let mut missing_service = sample();
        missing_service.service = String::new();
        assert!(!missing_service.required_fields_present());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let depense = sample();
        let json = serde_json::to_string(&depense).unwrap();
        let back: Depense = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, depense.id);
        assert_eq!(back.date, depense.date);
        assert_eq!(back.fournisseur, depense.fournisseur);
    }
}
