//! Core data models for Budget Pro
//!
//! Entities keep their French domain names. Statuses and categories are
//! closed enums; coercion of untrusted imported text lives in explicit
//! `from_untrusted` functions with documented defaults, separate from the
//! enum types themselves.

pub mod campagne;
pub mod demande;
pub mod depense;
pub mod ids;
pub mod operation;
pub mod service;
pub mod utilisateur;

pub use campagne::{Campagne, EtatCampagne};
pub use demande::{Categorie, Demande, StatutDemande};
pub use depense::Depense;
pub use ids::{CampagneId, DemandeId, DepenseId, OperationId, ServiceId, UtilisateurId};
pub use operation::{Operation, StatutOperation};
pub use service::ServiceMunicipal;
pub use utilisateur::{Role, Utilisateur};
