//! Opération model
//!
//! A multi-year capital project with a planned budget and a running spend
//! total. The recorded spend and the actual linked dépenses are independent,
//! separately-edited figures; no consistency constraint is enforced.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::OperationId;

/// Lifecycle status of an opération
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StatutOperation {
    /// Not started yet
    #[default]
    Planifie,
    /// Work in progress
    EnCours,
    /// Finished
    Termine,
    /// Abandoned
    Annule,
}

impl StatutOperation {
    /// Coerce untrusted text into a status, defaulting to Planifié.
    pub fn from_untrusted(s: &str) -> Self {
        let upper = s.to_uppercase();
        if upper.contains("COURS") {
            Self::EnCours
        } else if upper.contains("TERMIN") {
            Self::Termine
        } else if upper.contains("ANNUL") {
            Self::Annule
        } else {
            Self::Planifie
        }
    }
}

impl fmt::Display for StatutOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planifie => write!(f, "Planifié"),
            Self::EnCours => write!(f, "En cours"),
            Self::Termine => write!(f, "Terminé"),
            Self::Annule => write!(f, "Annulé"),
        }
    }
}

/// A capital operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    /// Unique identifier
    pub id: OperationId,

    /// Operation name
    pub nom: String,

    /// What the operation covers
    pub description: String,

    /// Planned budget in euros
    pub budget_prevu: f64,

    /// Spend to date in euros
    pub depenses: f64,

    /// Free-text period (e.g. "2024-2026")
    pub periode: String,

    /// Lifecycle status
    pub statut: StatutOperation,
}

impl Operation {
    /// Create a new opération with a fresh ID
    pub fn new(
        nom: impl Into<String>,
        description: impl Into<String>,
        budget_prevu: f64,
        depenses: f64,
        periode: impl Into<String>,
        statut: StatutOperation,
    ) -> Self {
        Self {
            id: OperationId::new(),
            nom: nom.into(),
            description: description.into(),
            budget_prevu,
            depenses,
            periode: periode.into(),
            statut,
        }
    }

    /// Whether the mandatory fields of the create dialog are filled
    pub fn required_fields_present(&self) -> bool {
        !self.nom.trim().is_empty()
    }

    /// Remaining budget (planned minus spend to date)
    pub fn reste(&self) -> f64 {
        self.budget_prevu - self.depenses
    }
}
