//! Opération service
//!
//! CRUD for multi-year opérations plus file import and export.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::error::{BudgetError, BudgetResult};
use crate::export::{self, export_operations_csv, export_operations_xlsx};
use crate::import::{map_operation_row, read_records};
use crate::models::{Operation, OperationId};
use crate::storage::Store;

/// Service for opération management
pub struct OperationService<'a> {
    store: &'a Store,
}

impl<'a> OperationService<'a> {
    /// Create a new opération service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Create a new opération
    pub fn create(&self, operation: Operation) -> BudgetResult<Operation> {
        if !operation.required_fields_present() {
            return Err(BudgetError::missing_required_fields());
        }
        self.store.operations.create(operation)
    }

    /// Get an opération by ID
    pub fn get(&self, id: OperationId) -> BudgetResult<Operation> {
        self.store
            .operations
            .get(id)?
            .ok_or_else(|| BudgetError::operation_not_found(id.to_string()))
    }

    /// List all opérations, most recently created first
    pub fn list(&self) -> BudgetResult<Vec<Operation>> {
        self.store.operations.list()
    }

    /// Update an existing opération
    pub fn update(&self, id: OperationId, fields: &Operation) -> BudgetResult<Operation> {
        if !fields.required_fields_present() {
            return Err(BudgetError::missing_required_fields());
        }
        self.store.operations.update(id, fields)
    }

    /// Delete an opération
    pub fn delete(&self, id: OperationId) -> BudgetResult<()> {
        self.store.operations.delete(id)
    }

    /// Delete every opération
    pub fn delete_all(&self) -> BudgetResult<()> {
        self.store.operations.delete_all()
    }

    /// Import opérations from a CSV or XLSX file, returns the imported count
    pub fn import_file(&self, path: &Path) -> BudgetResult<usize> {
        let records = read_records(path)?;
        let operations: Vec<Operation> = records.iter().map(map_operation_row).collect();
        let count = operations.len();
        self.store.operations.batch_create(operations)?;
        Ok(count)
    }

    /// Export all opérations to the given file, format chosen by extension
    pub fn export_file(&self, path: Option<PathBuf>) -> BudgetResult<PathBuf> {
        let path =
            path.unwrap_or_else(|| PathBuf::from(export::export_filename("operations", "csv")));
        let operations = self.store.operations.list()?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("csv") => {
                let file = File::create(&path)?;
                let mut writer = BufWriter::new(file);
                export_operations_csv(&operations, &mut writer)?;
            }
            Some("xlsx") => export_operations_xlsx(&operations, &path)?,
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
    use crate::models::StatutOperation;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, Store) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Store::new(&paths).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_create_requires_nom() {
        let (_temp_dir, store) = create_test_store();
        let service = OperationService::new(&store);

        let operation = Operation::new("  ", "", 1000.0, 0.0, "2024", StatutOperation::Planifie);
        let result = service.create(operation);
        assert!(matches!(result, Err(BudgetError::Validation(_))));
    }

    #[test]
    fn test_import_coerces_statut() {
        let (temp_dir, store) = create_test_store();
        let service = OperationService::new(&store);

        let input = temp_dir.path().join("operations.csv");
        std::fs::write(
            &input,
            "NOM;BUDGET PREVU;DEPENSES;PERIODE;STATUT\nRénovation église;450 000;125000;2024-2026;EN COURS\n",
        )
        .unwrap();

        let count = service.import_file(&input).unwrap();
        assert_eq!(count, 1);

        let imported = service.list().unwrap();
        assert_eq!(imported[0].nom, "Rénovation église");
        assert_eq!(imported[0].budget_prevu, 450000.0);
        assert_eq!(imported[0].statut, StatutOperation::EnCours);
        assert_eq!(imported[0].reste(), 325000.0);
    }
}
