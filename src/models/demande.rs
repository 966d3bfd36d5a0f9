//! Demande model
//!
//! A budget request submitted by a municipal service, tracked from draft
//! through approval.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::DemandeId;

/// Budget category of a demande
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Categorie {
    /// Operating expenses
    #[default]
    Fonctionnement,
    /// Capital/investment expenses
    Investissement,
}

impl Categorie {
    /// Coerce untrusted text into a category.
    ///
    /// Any value containing "INVEST" (case-insensitive) is Investissement;
    /// everything else, including empty text, defaults to Fonctionnement.
    pub fn from_untrusted(s: &str) -> Self {
        if s.to_uppercase().contains("INVEST") {
            Self::Investissement
        } else {
            Self::Fonctionnement
        }
    }
}

impl fmt::Display for Categorie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fonctionnement => write!(f, "Fonctionnement"),
            Self::Investissement => write!(f, "Investissement"),
        }
    }
}

/// Lifecycle status of a demande
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StatutDemande {
    /// Initial draft state
    #[default]
    Brouillon,
    /// Submitted, awaiting decision
    EnAttente,
    /// Approved
    Valide,
    /// Rejected
    Rejete,
}

impl StatutDemande {
    /// Coerce untrusted text into a status, defaulting to Brouillon.
    pub fn from_untrusted(s: &str) -> Self {
        let upper = s.to_uppercase();
        if upper.contains("VALID") {
            Self::Valide
        } else if upper.contains("REJET") {
            Self::Rejete
        } else if upper.contains("ATTENTE") {
            Self::EnAttente
        } else {
            Self::Brouillon
        }
    }
}

impl fmt::Display for StatutDemande {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Brouillon => write!(f, "Brouillon"),
            Self::EnAttente => write!(f, "En attente"),
            Self::Valide => write!(f, "Validé"),
            Self::Rejete => write!(f, "Rejeté"),
        }
    }
}

/// A budget request
///
/// `budget_valide` is conceptually bounded by `budget_titre` but the two are
/// independently edited fields; no consistency constraint is enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Demande {
    /// Unique identifier
    pub id: DemandeId,

    /// Requesting service (canonical name where one matched)
    pub service: String,

    /// Intervention domain (e.g. "Voirie", "Culture")
    pub domaine: String,

    /// Operating or investment budget
    pub categorie: Categorie,

    /// What the money is for
    pub description: String,

    /// Why the money is needed
    pub justification: String,

    /// Requested amount in euros
    pub budget_titre: f64,

    /// Validated amount in euros
    pub budget_valide: f64,

    /// Lifecycle status
    pub statut: StatutDemande,

    /// Creation date (ISO calendar date)
    pub date_creation: NaiveDate,
}

impl Demande {
    /// Create a new demande with a fresh ID
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        service: impl Into<String>,
        domaine: impl Into<String>,
        categorie: Categorie,
        description: impl Into<String>,
        justification: impl Into<String>,
        budget_titre: f64,
        budget_valide: f64,
        statut: StatutDemande,
        date_creation: NaiveDate,
    ) -> Self {
        Self {
            id: DemandeId::new(),
            service: service.into(),
            domaine: domaine.into(),
            categorie,
            description: description.into(),
            justification: justification.into(),
            budget_titre,
            budget_valide,
            statut,
            date_creation,
        }
    }

    /// Whether the mandatory fields of the create dialog are filled
    pub fn required_fields_present(&self) -> bool {
        !self.service.trim().is_empty() && !self.description.trim().is_empty()
    }
}
