//! Campagne model
//!
//! A fiscal-year budget cycle with an open/closed lifecycle. Read-only in
//! this application; campaigns are installed by `init` and listed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CampagneId;

/// Lifecycle state of a campagne
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EtatCampagne {
    /// Being prepared, not yet accepting demandes
    #[default]
    EnPreparation,
    /// Open for demandes
    Ouvert,
    /// Closed
    Cloture,
}

impl EtatCampagne {
    /// Coerce untrusted text into a state, defaulting to EnPréparation.
    pub fn from_untrusted(s: &str) -> Self {
        let upper = s.to_uppercase();
        if upper.contains("OUVERT") {
            Self::Ouvert
        } else if upper.contains("CLÔTUR") || upper.contains("CLOTUR") {
            Self::Cloture
        } else {
            Self::EnPreparation
        }
    }
}

impl fmt::Display for EtatCampagne {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnPreparation => write!(f, "En préparation"),
            Self::Ouvert => write!(f, "Ouvert"),
            Self::Cloture => write!(f, "Clôturé"),
        }
    }
}

/// A budget campaign
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campagne {
    /// Unique identifier
    pub id: CampagneId,

    /// Campaign name (e.g. "Budget 2025")
    pub nom: String,

    /// Fiscal period label
    pub periode: String,

    /// Opening date
    pub date_debut: NaiveDate,

    /// Closing date
    pub date_fin: NaiveDate,

    /// Lifecycle state
    pub etat: EtatCampagne,
}

impl Campagne {
    /// Create a new campagne with a fresh ID
    pub fn new(
        nom: impl Into<String>,
        periode: impl Into<String>,
        date_debut: NaiveDate,
        date_fin: NaiveDate,
        etat: EtatCampagne,
    ) -> Self {
        Self {
            id: CampagneId::new(),
            nom: nom.into(),
            periode: periode.into(),
            date_debut,
            date_fin,
            etat,
        }
    }
}
