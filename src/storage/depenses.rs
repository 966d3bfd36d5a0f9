//! Dépense repository
//!
//! Persists dépenses in depenses.json using the remote table's transport
//! field names (`montant_ttc`, `fournisseur`). Listing is ordered by expense
//! date, most recent first, as the expense screen expects.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Depense, DepenseId};

use super::file_io::{read_json, write_json_atomic};

/// Transport row, field names as in the remote `depenses` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepenseRow {
    pub id: DepenseId,
    pub service: String,
    #[serde(default)]
    pub operation: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub montant_ttc: Option<f64>,
    #[serde(default)]
    pub fournisseur: String,
    pub created_at: DateTime<Utc>,
}

impl DepenseRow {
    pub fn from_depense(depense: &Depense, created_at: DateTime<Utc>) -> Self {
        Self {
            id: depense.id,
            service: depense.service.clone(),
            operation: depense.operation.clone(),
            date: depense.date,
            description: depense.description.clone(),
            montant_ttc: Some(depense.montant_ttc),
            fournisseur: depense.fournisseur.clone(),
            created_at,
        }
    }

    pub fn into_depense(self) -> Depense {
        Depense {
            id: self.id,
            service: self.service,
            operation: self.operation,
            date: self.date,
            description: self.description,
            montant_ttc: self.montant_ttc.unwrap_or(0.0),
            fournisseur: self.fournisseur,
        }
    }
}

/// Serializable file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct DepenseData {
    depenses: Vec<DepenseRow>,
}

/// Repository for dépense persistence
pub struct DepenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<DepenseId, DepenseRow>>,
}

impl DepenseRepository {
    /// Create a new dépense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load dépenses from disk
    pub fn load(&self) -> BudgetResult<()> {
        let file_data: DepenseData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for row in file_data.depenses {
            data.insert(row.id, row);
        }

        Ok(())
    }

    fn save(&self) -> BudgetResult<()> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = DepenseData {
            depenses: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get all dépenses, most recent expense date first
    pub fn list(&self) -> BudgetResult<Vec<Depense>> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut rows: Vec<_> = data.values().cloned().collect();
        rows.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
                .then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
        });
        Ok(rows.into_iter().map(DepenseRow::into_depense).collect())
    }

    /// Get a dépense by ID
    pub fn get(&self, id: DepenseId) -> BudgetResult<Option<Depense>> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned().map(DepenseRow::into_depense))
    }

    /// Insert a new dépense
    pub fn create(&self, depense: Depense) -> BudgetResult<Depense> {
        {
            let mut data = self.data.write().map_err(|e| {
                BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            data.insert(depense.id, DepenseRow::from_depense(&depense, Utc::now()));
        }
        self.save()?;
        Ok(depense)
    }

    /// Insert a whole imported batch in one call.
    ///
    /// The batch is stamped once; each row gets a microsecond offset by
    /// position so the file order survives a coarse clock.
    pub fn batch_create(&self, depenses: Vec<Depense>) -> BudgetResult<Vec<Depense>> {
        {
            let mut data = self.data.write().map_err(|e| {
                BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            let stamp = Utc::now();
            for (i, depense) in depenses.iter().enumerate() {
                let created_at = stamp + chrono::Duration::microseconds(i as i64);
                data.insert(depense.id, DepenseRow::from_depense(depense, created_at));
            }
        }
        self.save()?;
        Ok(depenses)
    }

    /// Update an existing dépense, preserving its creation timestamp
    pub fn update(&self, id: DepenseId, fields: &Depense) -> BudgetResult<Depense> {
        let updated = {
            let mut data = self.data.write().map_err(|e| {
                BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            let existing = data
                .get(&id)
                .ok_or_else(|| BudgetError::depense_not_found(id.to_string()))?;
            let created_at = existing.created_at;

            let mut row = DepenseRow::from_depense(fields, created_at);
            row.id = id;
            data.insert(id, row.clone());
            row.into_depense()
        };
        self.save()?;
        Ok(updated)
    }

    /// Delete a dépense
    pub fn delete(&self, id: DepenseId) -> BudgetResult<()> {
        {
            let mut data = self.data.write().map_err(|e| {
                BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            if data.remove(&id).is_none() {
                return Err(BudgetError::depense_not_found(id.to_string()));
            }
        }
        self.save()
    }

    /// Delete every dépense
    pub fn delete_all(&self) -> BudgetResult<()> {
        {
            let mut data = self.data.write().map_err(|e| {
                BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            data.clear();
        }
        self.save()
    }

    /// Number of stored dépenses
    pub fn count(&self) -> BudgetResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}
