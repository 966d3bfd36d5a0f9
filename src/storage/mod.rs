//! Storage layer
//!
//! JSON-file persistence with atomic writes. Each entity gets its own
//! repository over its own file under the data directory; the [`Store`]
//! bundles them and is passed by reference to services and CLI handlers.

pub mod demandes;
pub mod depenses;
mod file_io;
pub mod init;
pub mod operations;
pub mod referentiel;

pub use demandes::DemandeRepository;
pub use depenses::DepenseRepository;
pub use init::seed_referentiel;
pub use operations::OperationRepository;
pub use referentiel::{CampagneRepository, ServiceRepository, UtilisateurRepository};

use crate::config::BudgetPaths;
use crate::error::BudgetResult;

/// All repositories over a single data directory
pub struct Store {
    pub demandes: DemandeRepository,
    pub depenses: DepenseRepository,
    pub operations: OperationRepository,
    pub campagnes: CampagneRepository,
    pub services: ServiceRepository,
    pub utilisateurs: UtilisateurRepository,
}

impl Store {
    /// Open the store, creating the data directory and loading every file
    pub fn new(paths: &BudgetPaths) -> BudgetResult<Self> {
        paths.ensure_directories()?;

        let store = Self {
            demandes: DemandeRepository::new(paths.demandes_file()),
            depenses: DepenseRepository::new(paths.depenses_file()),
            operations: OperationRepository::new(paths.operations_file()),
            campagnes: CampagneRepository::new(paths.campagnes_file()),
            services: ServiceRepository::new(paths.services_file()),
            utilisateurs: UtilisateurRepository::new(paths.utilisateurs_file()),
        };
        store.load_all()?;
        Ok(store)
    }

    /// Reload every repository from disk
    pub fn load_all(&self) -> BudgetResult<()> {
        self.demandes.load()?;
        self.depenses.load()?;
        self.operations.load()?;
        self.campagnes.load()?;
        self.services.load()?;
        self.utilisateurs.load()?;
        Ok(())
    }
}
