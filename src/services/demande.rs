//! Demande service
//!
//! Business logic for budget requests: CRUD with required-field checks,
//! filtered listing, and the CSV/XLSX import and export round trip.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::error::{BudgetError, BudgetResult};
use crate::export::{self, export_demandes_csv, export_demandes_xlsx};
use crate::import::{map_demande_row, read_records};
use crate::models::{Categorie, Demande, DemandeId, StatutDemande};
use crate::storage::Store;

/// Filters applied by the list command
#[derive(Debug, Clone, Default)]
pub struct DemandeFilter {
    /// Case-insensitive text search over description and service
    pub search: Option<String>,
    pub service: Option<String>,
    pub categorie: Option<Categorie>,
    pub statut: Option<StatutDemande>,
}

impl DemandeFilter {
    fn matches(&self, demande: &Demande) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let haystack = format!(
                "{} {}",
                demande.description.to_lowercase(),
                demande.service.to_lowercase()
            );
            if !haystack.contains(&needle) {
                return false;
            }
        }
        if let Some(service) = &self.service {
            if !demande.service.eq_ignore_ascii_case(service) {
                return false;
            }
        }
        if let Some(categorie) = self.categorie {
            if demande.categorie != categorie {
                return false;
            }
        }
        if let Some(statut) = self.statut {
            if demande.statut != statut {
                return false;
            }
        }
        true
    }
}

/// Service for demande management
pub struct DemandeService<'a> {
    store: &'a Store,
}

impl<'a> DemandeService<'a> {
    /// Create a new demande service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Create a new demande
    pub fn create(&self, demande: Demande) -> BudgetResult<Demande> {
        if !demande.required_fields_present() {
            return Err(BudgetError::missing_required_fields());
        }
        self.store.demandes.create(demande)
    }

    /// Get a demande by ID
    pub fn get(&self, id: DemandeId) -> BudgetResult<Demande> {
        self.store
            .demandes
            .get(id)?
            .ok_or_else(|| BudgetError::demande_not_found(id.to_string()))
    }

    /// List all demandes, most recent first
    pub fn list(&self) -> BudgetResult<Vec<Demande>> {
        self.store.demandes.list()
    }

    /// List demandes matching the given filters
    pub fn list_filtered(&self, filter: &DemandeFilter) -> BudgetResult<Vec<Demande>> {
        let demandes = self.store.demandes.list()?;
        Ok(demandes.into_iter().filter(|d| filter.matches(d)).collect())
    }

    /// Update an existing demande
    pub fn update(&self, id: DemandeId, fields: &Demande) -> BudgetResult<Demande> {
        if !fields.required_fields_present() {
            return Err(BudgetError::missing_required_fields());
        }
        self.store.demandes.update(id, fields)
    }

    /// Delete a demande
    pub fn delete(&self, id: DemandeId) -> BudgetResult<()> {
        self.store.demandes.delete(id)
    }

    /// Delete every demande
    pub fn delete_all(&self) -> BudgetResult<()> {
        self.store.demandes.delete_all()
    }

    /// Import demandes from a CSV or XLSX file
    ///
    /// Every row maps to a demande; the whole batch is stored in one call.
    /// Returns the number of imported demandes.
    pub fn import_file(&self, path: &Path) -> BudgetResult<usize> {
        let records = read_records(path)?;
        let demandes: Vec<Demande> = records.iter().map(map_demande_row).collect();
        let count = demandes.len();
        self.store.demandes.batch_create(demandes)?;
        Ok(count)
    }

    /// Export all demandes to the given file, format chosen by extension
    ///
    /// Without a path, writes `demandes_<date>.csv` in the current directory.
    pub fn export_file(&self, path: Option<PathBuf>) -> BudgetResult<PathBuf> {
        let path = path.unwrap_or_else(|| PathBuf::from(export::export_filename("demandes", "csv")));
        let demandes = self.store.demandes.list()?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("csv") => {
                let file = File::create(&path)?;
                let mut writer = BufWriter::new(file);
                export_demandes_csv(&demandes, &mut writer)?;
            }
            Some("xlsx") => export_demandes_xlsx(&demandes, &path)?,
            _ => {
                return Err(BudgetError::Export(format!(
                    "Unsupported export format: {}",
                    path.display()
                )))
            }
        }
        Ok(path)
    }
}
