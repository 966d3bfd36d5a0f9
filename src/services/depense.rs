//! Dépense service
//!
//! CRUD for recorded expenses plus file import and export.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::error::{BudgetError, BudgetResult};
use crate::export::{self, export_depenses_csv, export_depenses_xlsx};
use crate::import::{map_depense_row, read_records};
use crate::models::{Depense, DepenseId};
use crate::storage::Store;

/// Service for dépense management
pub struct DepenseService<'a> {
    store: &'a Store,
}

impl<'a> DepenseService<'a> {
    /// Create a new dépense service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Create a new dépense
    pub fn create(&self, depense: Depense) -> BudgetResult<Depense> {
        if !depense.required_fields_present() {
            return Err(BudgetError::missing_required_fields());
        }
        self.store.depenses.create(depense)
    }

    /// Get a dépense by ID
    pub fn get(&self, id: DepenseId) -> BudgetResult<Depense> {
        self.store
            .depenses
            .get(id)?
            .ok_or_else(|| BudgetError::depense_not_found(id.to_string()))
    }

    /// List all dépenses, most recent expense date first
    pub fn list(&self) -> BudgetResult<Vec<Depense>> {
        self.store.depenses.list()
    }

    /// Update an existing dépense
    pub fn update(&self, id: DepenseId, fields: &Depense) -> BudgetResult<Depense> {
        if !fields.required_fields_present() {
            return Err(BudgetError::missing_required_fields());
        }
        self.store.depenses.update(id, fields)
    }

    /// Delete a dépense
    pub fn delete(&self, id: DepenseId) -> BudgetResult<()> {
        self.store.depenses.delete(id)
    }

    /// Delete every dépense
    pub fn delete_all(&self) -> BudgetResult<()> {
        self.store.depenses.delete_all()
    }

    /// Import dépenses from a CSV or XLSX file, returns the imported count
    pub fn import_file(&self, path: &Path) -> BudgetResult<usize> {
        let records = read_records(path)?;
        let depenses: Vec<Depense> = records.iter().map(map_depense_row).collect();
        let count = depenses.len();
        self.store.depenses.batch_create(depenses)?;
        Ok(count)
    }

    /// Export all dépenses to the given file, format chosen by extension
    pub fn export_file(&self, path: Option<PathBuf>) -> BudgetResult<PathBuf> {
        let path = path.unwrap_or_else(|| PathBuf::from(export::export_filename("depenses", "csv")));
        let depenses = self.store.depenses.list()?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("csv") => {
                let file = File::create(&path)?;
                let mut writer = BufWriter::new(file);
                export_depenses_csv(&depenses, &mut writer)?;
            }
            Some("xlsx") => export_depenses_xlsx(&depenses, &path)?,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BudgetPaths;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, Store) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Store::new(&paths).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_create_requires_positive_amount() {
        let (_temp_dir, store) = create_test_store();
        let service = DepenseService::new(&store);

        let depense = Depense::new(
            "Finances",
            "",
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            "Fournitures",
            0.0,
            "",
        );
        let result = service.create(depense);
        assert!(matches!(result, Err(BudgetError::Validation(_))));
    }

    #[test]
    fn test_import_maps_amounts_and_services() {
        let (temp_dir, store) = create_test_store();
        let service = DepenseService::new(&store);

        let input = temp_dir.path().join("depenses.csv");
        std::fs::write(
            &input,
            "SERVICE;DESCRIPTION;MONTANT TTC;DATE;FOURNISSEUR\nRH;Formation paie;2 300,50;15/02/2024;AFPA\n",
        )
        .unwrap();

        let count = service.import_file(&input).unwrap();
        assert_eq!(count, 1);

        let imported = service.list().unwrap();
        assert_eq!(imported[0].service, "Ressources humaines");
        assert_eq!(imported[0].montant_ttc, 2300.5);
        assert_eq!(
            imported[0].date,
            NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()
        );
        assert_eq!(imported[0].fournisseur, "AFPA");
    }
}
