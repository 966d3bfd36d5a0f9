//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod demande;
pub mod depense;
pub mod operation;
pub mod referentiel;

pub use demande::{handle_demande_command, DemandeCommands};
pub use depense::{handle_depense_command, DepenseCommands};
pub use operation::{handle_operation_command, OperationCommands};
pub use referentiel::{
    handle_campagne_command, handle_service_command, handle_utilisateur_command, CampagneCommands,
    ServiceCommands, UtilisateurCommands,
};

use std::fmt::Display;
use std::str::FromStr;

/// Resolve a user-supplied identifier to an entity ID.
///
/// Accepts the full UUID, or the short display form with or without its
/// prefix; short forms are prefix-matched against the known IDs.
pub(crate) fn resolve_id<I>(prefix: &str, candidates: &[I], identifier: &str) -> Option<I>
where
    I: Copy + FromStr + Display,
{
    let stripped = identifier.strip_prefix(prefix).unwrap_or(identifier).trim();
    if stripped.is_empty() {
        return None;
    }

    if let Ok(id) = stripped.parse::<I>() {
        return Some(id);
    }

    candidates.iter().copied().find(|candidate| {
        candidate
            .to_string()
            .strip_prefix(prefix)
            .is_some_and(|short| short.starts_with(stripped))
    })
}
