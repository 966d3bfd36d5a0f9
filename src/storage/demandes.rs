//! Demande repository
//!
//! Persists demandes in demandes.json. Stored rows use the transport field
//! names of the remote table (`budget_titre`, `budget_valide`,
//! `date_creation`); the mapping to the in-memory entity is exact and
//! bidirectional, with absent/null amounts read back as 0. Every mutating
//! call persists immediately so the next read reflects it.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Categorie, Demande, DemandeId, StatutDemande};

use super::file_io::{read_json, write_json_atomic};

/// Transport row, field names as in the remote `demandes` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandeRow {
    pub id: DemandeId,
    pub service: String,
    #[serde(default)]
    pub domaine: String,
    pub categorie: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub justification: String,
    #[serde(default)]
    pub budget_titre: Option<f64>,
    #[serde(default)]
    pub budget_valide: Option<f64>,
    pub statut: String,
    pub date_creation: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl DemandeRow {
    pub fn from_demande(demande: &Demande, created_at: DateTime<Utc>) -> Self {
        Self {
            id: demande.id,
            service: demande.service.clone(),
            domaine: demande.domaine.clone(),
            categorie: demande.categorie.to_string(),
            description: demande.description.clone(),
            justification: demande.justification.clone(),
            budget_titre: Some(demande.budget_titre),
            budget_valide: Some(demande.budget_valide),
            statut: demande.statut.to_string(),
            date_creation: demande.date_creation,
            created_at,
        }
    }

    pub fn into_demande(self) -> Demande {
        Demande {
            id: self.id,
            service: self.service,
            domaine: self.domaine,
            categorie: Categorie::from_untrusted(&self.categorie),
            description: self.description,
            justification: self.justification,
            budget_titre: self.budget_titre.unwrap_or(0.0),
            budget_valide: self.budget_valide.unwrap_or(0.0),
            statut: StatutDemande::from_untrusted(&self.statut),
            date_creation: self.date_creation,
        }
    }
}

/// Serializable file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct DemandeData {
    demandes: Vec<DemandeRow>,
}

/// Repository for demande persistence
pub struct DemandeRepository {
    path: PathBuf,
    data: RwLock<HashMap<DemandeId, DemandeRow>>,
}

impl DemandeRepository {
    /// Create a new demande repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load demandes from disk
    pub fn load(&self) -> BudgetResult<()> {
        let file_data: DemandeData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for row in file_data.demandes {
            data.insert(row.id, row);
        }

        Ok(())
    }

    fn save(&self) -> BudgetResult<()> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = DemandeData {
            demandes: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get all demandes, most recently created first
    pub fn list(&self) -> BudgetResult<Vec<Demande>> {
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
        Ok(rows.into_iter().map(DemandeRow::into_demande).collect())
    }

    /// Get a demande by ID
    pub fn get(&self, id: DemandeId) -> BudgetResult<Option<Demande>> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned().map(DemandeRow::into_demande))
    }

    /// Insert a new demande
    pub fn create(&self, demande: Demande) -> BudgetResult<Demande> {
        {
            let mut data = self.data.write().map_err(|e| {
                BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            data.insert(demande.id, DemandeRow::from_demande(&demande, Utc::now()));
        }
        self.save()?;
        Ok(demande)
    }

    /// Insert a whole imported batch in one call.
    ///
    /// The batch is stamped once; each row gets a microsecond offset by
    /// position so the file order survives a coarse clock.
    pub fn batch_create(&self, demandes: Vec<Demande>) -> BudgetResult<Vec<Demande>> {
        {
            let mut data = self.data.write().map_err(|e| {
                BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            let stamp = Utc::now();
            for (i, demande) in demandes.iter().enumerate() {
                let created_at = stamp + chrono::Duration::microseconds(i as i64);
                data.insert(demande.id, DemandeRow::from_demande(demande, created_at));
            }
        }
        self.save()?;
        Ok(demandes)
    }

    /// Update an existing demande, preserving its creation timestamp
    pub fn update(&self, id: DemandeId, fields: &Demande) -> BudgetResult<Demande> {
        let updated = {
            let mut data = self.data.write().map_err(|e| {
                BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            let existing = data
                .get(&id)
                .ok_or_else(|| BudgetError::demande_not_found(id.to_string()))?;
            let created_at = existing.created_at;

            let mut row = DemandeRow::from_demande(fields, created_at);
            row.id = id;
            data.insert(id, row.clone());
            row.into_demande()
        };
        self.save()?;
        Ok(updated)
    }

    /// Delete a demande
    pub fn delete(&self, id: DemandeId) -> BudgetResult<()> {
        {
            let mut data = self.data.write().map_err(|e| {
                BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            if data.remove(&id).is_none() {
                return Err(BudgetError::demande_not_found(id.to_string()));
            }
        }
        self.save()
    }

    /// Delete every demande
    pub fn delete_all(&self) -> BudgetResult<()> {
        {
            let mut data = self.data.write().map_err(|e| {
                BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            data.clear();
        }
        self.save()
    }

    /// Number of stored demandes
    pub fn count(&self) -> BudgetResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_repo() -> (TempDir, DemandeRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = DemandeRepository::new(temp_dir.path().join("demandes.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    fn sample(description: &str) -> Demande {
        Demande::new(
            "Direction",
            "Administration",
            Categorie::Fonctionnement,
            description,
            "",
            1000.0,
            0.0,
            StatutDemande::Brouillon,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_create_and_list_order() {
        let (_temp_dir, repo) = test_repo();

        repo.create(sample("première")).unwrap();
        repo.create(sample("deuxième")).unwrap();

        let listed = repo.list().unwrap();
        assert_eq!(listed.len(), 2);
        // Most recently created first
        assert_eq!(listed[0].description, "deuxième");
        assert_eq!(listed[1].description, "première");
    }

    #[test]
    fn test_batch_create_keeps_row_order() {
        let (_temp_dir, repo) = test_repo();

        let batch: Vec<Demande> = (1..=10).map(|i| sample(&format!("ligne {}", i))).collect();
        repo.batch_create(batch).unwrap();

        // Even when the clock does not advance between rows, later file
        // rows must still sort ahead of earlier ones
        let listed = repo.list().unwrap();
        assert_eq!(listed.len(), 10);
        for (pos, demande) in listed.iter().enumerate() {
            assert_eq!(demande.description, format!("ligne {}", 10 - pos));
        }
    }

    #[test]
    fn test_persistence_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("demandes.json");

        let created = {
            let repo = DemandeRepository::new(path.clone());
            repo.load().unwrap();
            repo.create(sample("persistée")).unwrap()
        };

        let repo = DemandeRepository::new(path);
        repo.load().unwrap();
        let loaded = repo.get(created.id).unwrap().unwrap();
        assert_eq!(loaded.description, "persistée");
        assert_eq!(loaded.budget_titre, 1000.0);
        assert_eq!(loaded.statut, StatutDemande::Brouillon);
        assert_eq!(loaded.date_creation, created.date_creation);
    }

    #[test]
    fn test_null_amounts_read_back_as_zero() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("demandes.json");

        // A row written by an earlier version without amounts
        let json = format!(
            r#"{{"demandes":[{{"id":"{}","service":"Finances","categorie":"Fonctionnement","statut":"Brouillon","date_creation":"2024-02-20","created_at":"2024-02-20T10:00:00Z"}}]}}"#,
            uuid::Uuid::new_v4()
        );
        std::fs::write(&path, json).unwrap();

        let repo = DemandeRepository::new(path);
        repo.load().unwrap();
        let listed = repo.list().unwrap();
        assert_eq!(listed[0].budget_titre, 0.0);
        assert_eq!(listed[0].budget_valide, 0.0);
        assert_eq!(listed[0].domaine, "");
    }

    #[test]
    fn test_update_preserves_created_at_order() {
        let (_temp_dir, repo) = test_repo();

        let first = repo.create(sample("première")).unwrap();
        repo.create(sample("deuxième")).unwrap();

        let mut fields = first.clone();
        fields.budget_valide = 800.0;
        let updated = repo.update(first.id, &fields).unwrap();
        assert_eq!(updated.budget_valide, 800.0);

        // Updating must not move the row to the front
        let listed = repo.list().unwrap();
        assert_eq!(listed[0].description, "deuxième");
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let (_temp_dir, repo) = test_repo();
        let err = repo.update(DemandeId::new(), &sample("x")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_and_delete_all() {
        let (_temp_dir, repo) = test_repo();

        let created = repo.create(sample("à supprimer")).unwrap();
        repo.delete(created.id).unwrap();
        assert!(repo.delete(created.id).unwrap_err().is_not_found());

        repo.create(sample("a")).unwrap();
        repo.create(sample("b")).unwrap();
        repo.delete_all().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_batch_create() {
        let (_temp_dir, repo) = test_repo();

        let batch = vec![sample("a"), sample("b"), sample("c")];
        let inserted = repo.batch_create(batch).unwrap();
        assert_eq!(inserted.len(), 3);
        assert_eq!(repo.count().unwrap(), 3);
    }
}
