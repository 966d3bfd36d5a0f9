use anyhow::Result;
use clap::{Parser, Subcommand};

use budgetpro::cli::{
    handle_campagne_command, handle_demande_command, handle_depense_command,
    handle_operation_command, handle_service_command, handle_utilisateur_command,
};
use budgetpro::config::BudgetPaths;
use budgetpro::display::format_totals;
use budgetpro::services::compute_totals;
use budgetpro::storage::{seed_referentiel, Store};

#[derive(Parser)]
#[command(
    name = "budgetpro",
    version,
    about = "Gestion budgétaire communale en ligne de commande",
    long_about = "Budget Pro gère le budget d'une petite commune depuis le terminal: \
                  demandes budgétaires, dépenses, opérations pluriannuelles, avec \
                  import et export de fichiers CSV et Excel."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Demandes budgétaires
    #[command(subcommand)]
    Demande(budgetpro::cli::DemandeCommands),

    /// Dépenses
    #[command(subcommand)]
    Depense(budgetpro::cli::DepenseCommands),

    /// Opérations pluriannuelles
    #[command(subcommand)]
    Operation(budgetpro::cli::OperationCommands),

    /// Campagnes budgétaires
    #[command(subcommand)]
    Campagne(budgetpro::cli::CampagneCommands),

    /// Services municipaux
    #[command(subcommand)]
    Service(budgetpro::cli::ServiceCommands),

    /// Utilisateurs
    #[command(subcommand)]
    Utilisateur(budgetpro::cli::UtilisateurCommands),

    /// Tableau de bord: totaux demandés, validés, dépensés
    Dashboard,

    /// Initialize the data directory and install the reference data
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let store = Store::new(&paths)?;

    match cli.command {
        Some(Commands::Demande(cmd)) => {
            handle_demande_command(&store, cmd)?;
        }
        Some(Commands::Depense(cmd)) => {
            handle_depense_command(&store, cmd)?;
        }
        Some(Commands::Operation(cmd)) => {
            handle_operation_command(&store, cmd)?;
        }
        Some(Commands::Campagne(cmd)) => {
            handle_campagne_command(&store, cmd)?;
        }
        Some(Commands::Service(cmd)) => {
            handle_service_command(&store, cmd)?;
        }
        Some(Commands::Utilisateur(cmd)) => {
            handle_utilisateur_command(&store, cmd)?;
        }
        Some(Commands::Dashboard) => {
            let totals = compute_totals(&store)?;
            print!("{}", format_totals(&totals));
        }
        Some(Commands::Init) => {
            println!("Initialisation de Budget Pro: {}", paths.data_dir().display());
            seed_referentiel(&store)?;
            println!("Initialisation terminée.");
            println!();
            println!("Référentiel installé:");
            println!("  - 8 services municipaux");
            println!("  - 3 campagnes budgétaires");
            println!("  - 5 utilisateurs");
            println!();
            println!("Lancez 'budgetpro service list' pour voir les services.");
        }
        Some(Commands::Config) => {
            println!("Configuration Budget Pro");
            println!("========================");
            println!("Répertoire de données: {}", paths.data_dir().display());
            println!(
                "Référentiel installé:  {}",
                if paths.is_initialized() { "oui" } else { "non" }
            );
        }
        None => {
            println!("Budget Pro - Gestion budgétaire communale");
            println!();
            println!("Lancez 'budgetpro --help' pour l'aide.");
            println!("Lancez 'budgetpro init' pour installer le référentiel.");
        }
    }

    Ok(())
}
