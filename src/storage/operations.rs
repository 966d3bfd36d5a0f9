//! Opération repository
//!
//! Persists opérations pluriannuelles in operations.json. Budget figures
//! travel as nullable numbers and are coerced to zero on read.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Operation, OperationId, StatutOperation};

use super::file_io::{read_json, write_json_atomic};

/// Transport row, field names as in the remote `operations` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationRow {
    pub id: OperationId,
    pub nom: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub budget_prevu: Option<f64>,
    #[serde(default)]
    pub depenses: Option<f64>,
    #[serde(default)]
    pub periode: String,
    #[serde(default)]
    pub statut: String,
    pub created_at: DateTime<Utc>,
}

impl OperationRow {
    pub fn from_operation(operation: &Operation, created_at: DateTime<Utc>) -> Self {
        Self {
            id: operation.id,
            nom: operation.nom.clone(),
            description: operation.description.clone(),
            budget_prevu: Some(operation.budget_prevu),
            depenses: Some(operation.depenses),
            periode: operation.periode.clone(),
            statut: operation.statut.to_string(),
            created_at,
        }
    }

    pub fn into_operation(self) -> Operation {
        Operation {
            id: self.id,
            nom: self.nom,
            description: self.description,
            budget_prevu: self.budget_prevu.unwrap_or(0.0),
            depenses: self.depenses.unwrap_or(0.0),
            periode: self.periode,
            statut: StatutOperation::from_untrusted(&self.statut),
        }
    }
}

/// Serializable file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct OperationData {
    operations: Vec<OperationRow>,
}

/// Repository for opération persistence
pub struct OperationRepository {
    path: PathBuf,
    data: RwLock<HashMap<OperationId, OperationRow>>,
}

impl OperationRepository {
    /// Create a new opération repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load opérations from disk
    pub fn load(&self) -> BudgetResult<()> {
        let file_data: OperationData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for row in file_data.operations {
            data.insert(row.id, row);
        }

        Ok(())
    }

    fn save(&self) -> BudgetResult<()> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = OperationData {
            operations: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get all opérations, most recently created first
    pub fn list(&self) -> BudgetResult<Vec<Operation>> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut rows: Vec<_> = data.values().cloned().collect();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
        });
        Ok(rows.into_iter().map(OperationRow::into_operation).collect())
    }

    /// Get an opération by ID
    pub fn get(&self, id: OperationId) -> BudgetResult<Option<Operation>> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned().map(OperationRow::into_operation))
    }

    /// Insert a new opération
    pub fn create(&self, operation: Operation) -> BudgetResult<Operation> {
        {
            let mut data = self.data.write().map_err(|e| {
                BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            data.insert(
                operation.id,
                OperationRow::from_operation(&operation, Utc::now()),
            );
        }
        self.save()?;
        Ok(operation)
    }

    /// Insert a whole imported batch in one call.
    ///
    /// The batch is stamped once; each row gets a microsecond offset by
    /// position so the file order survives a coarse clock.
    pub fn batch_create(&self, operations: Vec<Operation>) -> BudgetResult<Vec<Operation>> {
        {
            let mut data = self.data.write().map_err(|e| {
                BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            let stamp = Utc::now();
            for (i, operation) in operations.iter().enumerate() {
                let created_at = stamp + chrono::Duration::microseconds(i as i64);
                data.insert(
                    operation.id,
                    OperationRow::from_operation(operation, created_at),
                );
            }
        }
        self.save()?;
        Ok(operations)
    }

    /// Update an existing opération, preserving its creation timestamp
    pub fn update(&self, id: OperationId, fields: &Operation) -> BudgetResult<Operation> {
        let updated = {
            let mut data = self.data.write().map_err(|e| {
                BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            let existing = data
                .get(&id)
                .ok_or_else(|| BudgetError::operation_not_found(id.to_string()))?;
            let created_at = existing.created_at;

            let mut row = OperationRow::from_operation(fields, created_at);
            row.id = id;
            data.insert(id, row.clone());
            row.into_operation()
        };
        self.save()?;
        Ok(updated)
    }

    /// Delete an opération
    pub fn delete(&self, id: OperationId) -> BudgetResult<()> {
        {
            let mut data = self.data.write().map_err(|e| {
                BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            if data.remove(&id).is_none() {
                return Err(BudgetError::operation_not_found(id.to_string()));
            }
        }
        self.save()
    }

    /// Delete every opération
    pub fn delete_all(&self) -> BudgetResult<()> {
        {
            let mut data = self.data.write().map_err(|e| {
                BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            data.clear();
        }
        self.save()
    }

    /// Number of stored opérations
    pub fn count(&self) -> BudgetResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}
