//! Demande CLI commands

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::display::{format_demande_details, format_demande_list};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Categorie, Demande, DemandeId, StatutDemande};
use crate::services::{DemandeFilter, DemandeService};
use crate::storage::Store;

use super::resolve_id;

/// Demande subcommands
#[derive(Subcommand)]
pub enum DemandeCommands {
    /// List demandes, most recent first
    List {
        /// Text search over description and service
        #[arg(short, long)]
        search: Option<String>,
        /// Filter by service
        #[arg(long)]
        service: Option<String>,
        /// Filter by catégorie (Fonctionnement / Investissement)
        #[arg(long)]
        categorie: Option<String>,
        /// Filter by statut (Brouillon / En attente / Validé / Rejeté)
        #[arg(long)]
        statut: Option<String>,
    },

    /// Create a new demande
    Add {
        /// Service émetteur
        #[arg(long)]
        service: String,
        /// Description de la demande
        #[arg(long)]
        description: String,
        /// Domaine d'intervention
        #[arg(long, default_value = "")]
        domaine: String,
        /// Catégorie (Fonctionnement / Investissement)
        #[arg(long, default_value = "Fonctionnement")]
        categorie: String,
        /// Justification
        #[arg(long, default_value = "")]
        justification: String,
        /// Budget demandé
        #[arg(long, default_value_t = 0.0)]
        budget: f64,
        /// Budget validé
        #[arg(long, default_value_t = 0.0)]
        budget_valide: f64,
        /// Statut initial
        #[arg(long, default_value = "Brouillon")]
        statut: String,
        /// Date de création (YYYY-MM-DD), today by default
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show a demande's details
    Show {
        /// Demande ID (full or short form)
        id: String,
    },

    /// Edit a demande
    Edit {
        /// Demande ID (full or short form)
        id: String,
        #[arg(long)]
        service: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        domaine: Option<String>,
        #[arg(long)]
        categorie: Option<String>,
        #[arg(long)]
        justification: Option<String>,
        #[arg(long)]
        budget: Option<f64>,
        #[arg(long)]
        budget_valide: Option<f64>,
        #[arg(long)]
        statut: Option<String>,
    },

    /// Delete a demande
    Delete {
        /// Demande ID (full or short form)
        id: String,
    },

    /// Delete every demande
    #[command(name = "delete-all")]
    DeleteAll {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Import demandes from a CSV or XLSX file
    Import {
        /// Input file (.csv, .xlsx, .xls)
        file: PathBuf,
    },

    /// Export demandes to a CSV or XLSX file
    Export {
        /// Output file; defaults to demandes_<date>.csv
        file: Option<PathBuf>,
    },
}

fn find_demande(service: &DemandeService, identifier: &str) -> BudgetResult<Demande> {
    let candidates: Vec<DemandeId> = service.list()?.into_iter().map(|d| d.id).collect();
    let id = resolve_id("dem-", &candidates, identifier)
        .ok_or_else(|| BudgetError::demande_not_found(identifier.to_string()))?;
    service.get(id)
}

/// Handle a demande command
pub fn handle_demande_command(store: &Store, cmd: DemandeCommands) -> BudgetResult<()> {
    let service = DemandeService::new(store);

    match cmd {
        DemandeCommands::List {
            search,
            service: service_filter,
            categorie,
            statut,
        } => {
            let filter = DemandeFilter {
                search,
                service: service_filter,
                categorie: categorie.as_deref().map(Categorie::from_untrusted),
                statut: statut.as_deref().map(StatutDemande::from_untrusted),
            };
            let demandes = service.list_filtered(&filter)?;
            print!("{}", format_demande_list(&demandes));
        }

        DemandeCommands::Add {
            service: service_name,
            description,
            domaine,
            categorie,
            justification,
            budget,
            budget_valide,
            statut,
            date,
        } => {
            let demande = Demande::new(
                service_name,
                domaine,
                Categorie::from_untrusted(&categorie),
                description,
                justification,
                budget,
                budget_valide,
                StatutDemande::from_untrusted(&statut),
                date.unwrap_or_else(|| Local::now().date_naive()),
            );
            let created = service.create(demande)?;
            println!("Demande créée: {}", created.id);
        }

        DemandeCommands::Show { id } => {
            let demande = find_demande(&service, &id)?;
            print!("{}", format_demande_details(&demande));
        }

        DemandeCommands::Edit {
            id,
            service: service_name,
            description,
            domaine,
            categorie,
            justification,
            budget,
            budget_valide,
            statut,
        } => {
            let mut demande = find_demande(&service, &id)?;

            if let Some(v) = service_name {
                demande.service = v;
            }
            if let Some(v) = description {
                demande.description = v;
            }
            if let Some(v) = domaine {
                demande.domaine = v;
            }
            if let Some(v) = categorie {
                demande.categorie = Categorie::from_untrusted(&v);
            }
            if let Some(v) = justification {
                demande.justification = v;
            }
            if let Some(v) = budget {
                demande.budget_titre = v;
            }
            if let Some(v) = budget_valide {
                demande.budget_valide = v;
            }
            if let Some(v) = statut {
                demande.statut = StatutDemande::from_untrusted(&v);
            }

            let updated = service.update(demande.id, &demande)?;
            println!("Demande modifiée: {}", updated.id);
        }

        DemandeCommands::Delete { id } => {
            let demande = find_demande(&service, &id)?;
            service.delete(demande.id)?;
            println!("Demande supprimée: {}", demande.id);
        }

        DemandeCommands::DeleteAll { yes } => {
            if !yes {
                return Err(BudgetError::Validation(
                    "Suppression de toutes les demandes: relancez avec --yes pour confirmer".into(),
                ));
            }
            service.delete_all()?;
            println!("Toutes les demandes ont été supprimées");
        }

        DemandeCommands::Import { file } => {
            let count = service.import_file(&file)?;
            println!("{} demande(s) importée(s) depuis {}", count, file.display());
        }

        DemandeCommands::Export { file } => {
            let written = service.export_file(file)?;
            println!("Demandes exportées vers {}", written.display());
        }
    }

    Ok(())
}
