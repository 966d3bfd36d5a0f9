//! Utilisateur model
//!
//! An application user with a role. Read-only in this application.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UtilisateurId;

/// Role of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Role {
    /// Full access
    Admin,
    /// Read-only access
    #[default]
    Lecteur,
    /// Can create and edit entities
    Editeur,
}

impl Role {
    /// Coerce untrusted text into a role, defaulting to Lecteur.
    pub fn from_untrusted(s: &str) -> Self {
        let upper = s.to_uppercase();
        if upper.contains("ADMIN") {
            Self::Admin
        } else if upper.contains("DIT") {
            // "Éditeur" / "Editeur"
            Self::Editeur
        } else {
            Self::Lecteur
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "Admin"),
            Self::Lecteur => write!(f, "Lecteur"),
            Self::Editeur => write!(f, "Éditeur"),
        }
    }
}

/// An application user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Utilisateur {
    /// Unique identifier
    pub id: UtilisateurId,

    /// Full name
    pub nom: String,

    /// Email address
    pub email: String,

    /// Service the user belongs to
    pub service: String,

    /// Access role
    pub role: Role,
}

impl Utilisateur {
    /// Create a new utilisateur with a fresh ID
    pub fn new(
        nom: impl Into<String>,
        email: impl Into<String>,
        service: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: UtilisateurId::new(),
            nom: nom.into(),
            email: email.into(),
            service: service.into(),
            role,
        }
    }
}
