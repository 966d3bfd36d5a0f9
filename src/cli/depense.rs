//! Dépense CLI commands

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::display::format_depense_list;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Depense, DepenseId};
use crate::services::DepenseService;
use crate::storage::Store;

use super::resolve_id;

/// Dépense subcommands
#[derive(Subcommand)]
pub enum DepenseCommands {
    /// List dépenses, most recent first
    List,

    /// Record a new dépense
    Add {
        /// Service concerné
        #[arg(long)]
        service: String,
        /// Description de la dépense
        #[arg(long)]
        description: String,
        /// Montant TTC
        #[arg(long)]
        montant: f64,
        /// Opération de rattachement
        #[arg(long, default_value = "")]
        operation: String,
        /// Fournisseur
        #[arg(long, default_value = "")]
        fournisseur: String,
        /// Date de la dépense (YYYY-MM-DD), today by default
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Edit a dépense
    Edit {
        /// Dépense ID (full or short form)
        id: String,
        #[arg(long)]
        service: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        montant: Option<f64>,
        #[arg(long)]
        operation: Option<String>,
        #[arg(long)]
        fournisseur: Option<String>,
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Delete a dépense
    Delete {
        /// Dépense ID (full or short form)
        id: String,
    },

    /// Delete every dépense
    #[command(name = "delete-all")]
    DeleteAll {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Import dépenses from a CSV or XLSX file
    Import {
        /// Input file (.csv, .xlsx, .xls)
        file: PathBuf,
    },

    /// Export dépenses to a CSV or XLSX file
    Export {
        /// Output file; defaults to depenses_<date>.csv
        file: Option<PathBuf>,
    },
}

fn find_depense(service: &DepenseService, identifier: &str) -> BudgetResult<Depense> {
    let candidates: Vec<DepenseId> = service.list()?.into_iter().map(|d| d.id).collect();
    let id = resolve_id("dep-", &candidates, identifier)
        .ok_or_else(|| BudgetError::depense_not_found(identifier.to_string()))?;
    service.get(id)
}

/// Handle a dépense command
pub fn handle_depense_command(store: &Store, cmd: DepenseCommands) -> BudgetResult<()> {
    let service = DepenseService::new(store);

    match cmd {
        DepenseCommands::List => {
            let depenses = service.list()?;
            print!("{}", format_depense_list(&depenses));
        }

        DepenseCommands::Add {
            service: service_name,
            description,
            montant,
            operation,
            fournisseur,
            date,
        } => {
            let depense = Depense::new(
                service_name,
                operation,
                date.unwrap_or_else(|| Local::now().date_naive()),
                description,
                montant,
                fournisseur,
            );
            let created = service.create(depense)?;
            println!("Dépense enregistrée: {}", created.id);
        }

        DepenseCommands::Edit {
            id,
            service: service_name,
            description,
            montant,
            operation,
            fournisseur,
            date,
        } => {
            let mut depense = find_depense(&service, &id)?;

            if let Some(v) = service_name {
                depense.service = v;
            }
            if let Some(v) = description {
                depense.description = v;
            }
            if let Some(v) = montant {
                depense.montant_ttc = v;
            }
            if let Some(v) = operation {
                depense.operation = v;
            }
            if let Some(v) = fournisseur {
                depense.fournisseur = v;
            }
            if let Some(v) = date {
                depense.date = v;
            }

            let updated = service.update(depense.id, &depense)?;
            println!("Dépense modifiée: {}", updated.id);
        }

        DepenseCommands::Delete { id } => {
            let depense = find_depense(&service, &id)?;
            service.delete(depense.id)?;
            println!("Dépense supprimée: {}", depense.id);
        }

        DepenseCommands::DeleteAll { yes } => {
            if !yes {
                return Err(BudgetError::Validation(
                    "Suppression de toutes les dépenses: relancez avec --yes pour confirmer".into(),
                ));
            }
            service.delete_all()?;
            println!("Toutes les dépenses ont été supprimées");
        }

        DepenseCommands::Import { file } => {
            let count = service.import_file(&file)?;
            println!("{} dépense(s) importée(s) depuis {}", count, file.display());
        }

        DepenseCommands::Export { file } => {
            let written = service.export_file(file)?;
            println!("Dépenses exportées vers {}", written.display());
        }
    }

    Ok(())
}
