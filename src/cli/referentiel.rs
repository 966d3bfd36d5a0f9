//! Référentiel CLI commands
//!
//! Campagnes, services and utilisateurs are read-only from the CLI; the
//! only mutation is the reseed done by `init`.

use clap::Subcommand;

use crate::display::{format_campagne_list, format_service_list, format_utilisateur_list};
use crate::error::BudgetResult;
use crate::storage::Store;

/// Campagne subcommands
#[derive(Subcommand)]
pub enum CampagneCommands {
    /// List the campagnes budgétaires
    List,
}

/// Service municipal subcommands
#[derive(Subcommand)]
pub enum ServiceCommands {
    /// List the services municipaux
    List,
}

/// Utilisateur subcommands
#[derive(Subcommand)]
pub enum UtilisateurCommands {
    /// List the utilisateurs
    List,
}

/// Handle a campagne command
pub fn handle_campagne_command(store: &Store, cmd: CampagneCommands) -> BudgetResult<()> {
    match cmd {
        CampagneCommands::List => {
            let campagnes = store.campagnes.list()?;
            print!("{}", format_campagne_list(&campagnes));
        }
    }
    Ok(())
}

/// Handle a service command
pub fn handle_service_command(store: &Store, cmd: ServiceCommands) -> BudgetResult<()> {
    match cmd {
        ServiceCommands::List => {
            let services = store.services.list()?;
            print!("{}", format_service_list(&services));
        }
    }
    Ok(())
}

/// Handle an utilisateur command
pub fn handle_utilisateur_command(store: &Store, cmd: UtilisateurCommands) -> BudgetResult<()> {
    match cmd {
        UtilisateurCommands::List => {
            let utilisateurs = store.utilisateurs.list()?;
            print!("{}", format_utilisateur_list(&utilisateurs));
        }
    }
    Ok(())
}
