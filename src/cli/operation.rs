//! Opération CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::display::{format_operation_details, format_operation_list};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Operation, OperationId, StatutOperation};
use crate::services::OperationService;
use crate::storage::Store;

use super::resolve_id;

/// Opération subcommands
#[derive(Subcommand)]
pub enum OperationCommands {
    /// List opérations, most recent first
    List,

    /// Create a new opération
    Add {
        /// Nom de l'opération
        #[arg(long)]
        nom: String,
        /// Description
        #[arg(long, default_value = "")]
        description: String,
        /// Budget prévu
        #[arg(long, default_value_t = 0.0)]
        budget: f64,
        /// Dépenses déjà réalisées
        #[arg(long, default_value_t = 0.0)]
        depenses: f64,
        /// Période (ex: 2024-2026)
        #[arg(long, default_value = "")]
        periode: String,
        /// Statut (Planifié / En cours / Terminé / Annulé)
        #[arg(long, default_value = "Planifié")]
        statut: String,
    },

    /// Show an opération's details
    Show {
        /// Opération ID (full or short form)
        id: String,
    },

    /// Edit an opération
    Edit {
        /// Opération ID (full or short form)
        id: String,
        #[arg(long)]
        nom: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        budget: Option<f64>,
        #[arg(long)]
        depenses: Option<f64>,
        #[arg(long)]
        periode: Option<String>,
        #[arg(long)]
        statut: Option<String>,
    },

    /// Delete an opération
    Delete {
        /// Opération ID (full or short form)
        id: String,
    },

    /// Delete every opération
    #[command(name = "delete-all")]
    DeleteAll {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Import opérations from a CSV or XLSX file
    Import {
        /// Input file (.csv, .xlsx, .xls)
        file: PathBuf,
    },

    /// Export opérations to a CSV or XLSX file
    Export {
        /// Output file; defaults to operations_<date>.csv
        file: Option<PathBuf>,
    },
}

fn find_operation(service: &OperationService, identifier: &str) -> BudgetResult<Operation> {
    let candidates: Vec<OperationId> = service.list()?.into_iter().map(|o| o.id).collect();
    let id = resolve_id("ope-", &candidates, identifier)
        .ok_or_else(|| BudgetError::operation_not_found(identifier.to_string()))?;
    service.get(id)
}

/// Handle an opération command
pub fn handle_operation_command(store: &Store, cmd: OperationCommands) -> BudgetResult<()> {
    let service = OperationService::new(store);

    match cmd {
        OperationCommands::List => {
            let operations = service.list()?;
            print!("{}", format_operation_list(&operations));
        }

        OperationCommands::Add {
            nom,
            description,
            budget,
            depenses,
            periode,
            statut,
        } => {
            let operation = Operation::new(
                nom,
                description,
                budget,
                depenses,
                periode,
                StatutOperation::from_untrusted(&statut),
            );
            let created = service.create(operation)?;
            println!("Opération créée: {}", created.id);
        }

        OperationCommands::Show { id } => {
            let operation = find_operation(&service, &id)?;
            print!("{}", format_operation_details(&operation));
        }

        OperationCommands::Edit {
            id,
            nom,
            description,
            budget,
            depenses,
            periode,
            statut,
        } => {
            let mut operation = find_operation(&service, &id)?;

            if let Some(v) = nom {
                operation.nom = v;
            }
            if let Some(v) = description {
                operation.description = v;
            }
            if let Some(v) = budget {
                operation.budget_prevu = v;
            }
            if let Some(v) = depenses {
                operation.depenses = v;
            }
            if let Some(v) = periode {
                operation.periode = v;
            }
            if let Some(v) = statut {
                operation.statut = StatutOperation::from_untrusted(&v);
            }

            let updated = service.update(operation.id, &operation)?;
            println!("Opération modifiée: {}", updated.id);
        }

        OperationCommands::Delete { id } => {
            let operation = find_operation(&service, &id)?;
            service.delete(operation.id)?;
            println!("Opération supprimée: {}", operation.id);
        }

        OperationCommands::DeleteAll { yes } => {
            if !yes {
                return Err(BudgetError::Validation(
                    "Suppression de toutes les opérations: relancez avec --yes pour confirmer"
                        .into(),
                ));
            }
            service.delete_all()?;
            println!("Toutes les opérations ont été supprimées");
        }

        OperationCommands::Import { file } => {
            let count = service.import_file(&file)?;
            println!(
                "{} opération(s) importée(s) depuis {}",
                count,
                file.display()
            );
        }

        OperationCommands::Export { file } => {
            let written = service.export_file(file)?;
            println!("Opérations exportées vers {}", written.display());
        }
    }

    Ok(())
}
