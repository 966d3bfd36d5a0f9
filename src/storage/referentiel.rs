//! Référentiel repositories
//!
//! Campagnes, services municipaux and utilisateurs are reference data: the
//! CLI reads them and (re)seeds them at init, but never edits single rows.
//! Each gets its own JSON file with insertion-ordered listing.

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{
    Campagne, CampagneId, EtatCampagne, Role, ServiceId, ServiceMunicipal, Utilisateur,
    UtilisateurId,
};

use super::file_io::{read_json, write_json_atomic};

/// Transport row for the `campagnes` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampagneRow {
    pub id: CampagneId,
    pub nom: String,
    #[serde(default)]
    pub periode: String,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    #[serde(default)]
    pub etat: String,
    pub created_at: DateTime<Utc>,
}

impl CampagneRow {
    pub fn from_campagne(campagne: &Campagne, created_at: DateTime<Utc>) -> Self {
        Self {
            id: campagne.id,
            nom: campagne.nom.clone(),
            periode: campagne.periode.clone(),
            date_debut: campagne.date_debut,
            date_fin: campagne.date_fin,
            etat: campagne.etat.to_string(),
            created_at,
        }
    }

    pub fn into_campagne(self) -> Campagne {
        Campagne {
            id: self.id,
            nom: self.nom,
            periode: self.periode,
            date_debut: self.date_debut,
            date_fin: self.date_fin,
            etat: EtatCampagne::from_untrusted(&self.etat),
        }
    }
}

/// Transport row for the `services` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRow {
    pub id: ServiceId,
    pub nom: String,
    #[serde(default)]
    pub responsable: String,
    #[serde(default)]
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl ServiceRow {
    pub fn from_service(service: &ServiceMunicipal, created_at: DateTime<Utc>) -> Self {
        Self {
            id: service.id,
            nom: service.nom.clone(),
            responsable: service.responsable.clone(),
            email: service.email.clone(),
            created_at,
        }
    }

    pub fn into_service(self) -> ServiceMunicipal {
        ServiceMunicipal {
            id: self.id,
            nom: self.nom,
            responsable: self.responsable,
            email: self.email,
        }
    }
}

/// Transport row for the `utilisateurs` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UtilisateurRow {
    pub id: UtilisateurId,
    pub nom: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl UtilisateurRow {
    pub fn from_utilisateur(utilisateur: &Utilisateur, created_at: DateTime<Utc>) -> Self {
        Self {
            id: utilisateur.id,
            nom: utilisateur.nom.clone(),
            email: utilisateur.email.clone(),
            service: utilisateur.service.clone(),
            role: utilisateur.role.to_string(),
            created_at,
        }
    }

    pub fn into_utilisateur(self) -> Utilisateur {
        Utilisateur {
            id: self.id,
            nom: self.nom,
            email: self.email,
            service: self.service,
            role: Role::from_untrusted(&self.role),
        }
    }
}

macro_rules! referentiel_repository {
    (
        $(#[$doc:meta])*
        $repo:ident, $row:ty, $model:ty, $file_struct:ident,
        $field:ident, $from_model:ident, $into_model:ident
    ) => {
        #[derive(Debug, Clone, Default, Serialize, Deserialize)]
        struct $file_struct {
            $field: Vec<$row>,
        }

        $(#[$doc])*
        pub struct $repo {
            path: PathBuf,
            rows: RwLock<Vec<$row>>,
        }

        impl $repo {
            pub fn new(path: PathBuf) -> Self {
                Self {
                    path,
                    rows: RwLock::new(Vec::new()),
                }
            }

            /// Load reference rows from disk
            pub fn load(&self) -> BudgetResult<()> {
                let file_data: $file_struct = read_json(&self.path)?;

                let mut rows = self.rows.write().map_err(|e| {
                    BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
                })?;
                *rows = file_data.$field;
                Ok(())
            }

            /// Get all rows in insertion order
            pub fn list(&self) -> BudgetResult<Vec<$model>> {
                let rows = self.rows.read().map_err(|e| {
                    BudgetError::Storage(format!("Failed to acquire read lock: {}", e))
                })?;
                Ok(rows.iter().cloned().map(<$row>::$into_model).collect())
            }

            /// Number of stored rows
            pub fn count(&self) -> BudgetResult<usize> {
                let rows = self.rows.read().map_err(|e| {
                    BudgetError::Storage(format!("Failed to acquire read lock: {}", e))
                })?;
                Ok(rows.len())
            }

            /// Replace the whole table, used when (re)seeding
            pub fn replace_all(&self, models: &[$model]) -> BudgetResult<()> {
                {
                    let mut rows = self.rows.write().map_err(|e| {
                        BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
                    })?;
                    *rows = models
                        .iter()
                        .map(|m| <$row>::$from_model(m, Utc::now()))
                        .collect();
                }
                self.save()
            }

            fn save(&self) -> BudgetResult<()> {
                let rows = self.rows.read().map_err(|e| {
                    BudgetError::Storage(format!("Failed to acquire read lock: {}", e))
                })?;
                let file_data = $file_struct {
                    $field: rows.clone(),
                };
                write_json_atomic(&self.path, &file_data)
            }
        }
    };
}

referentiel_repository!(
    /// Repository for campagnes budgétaires
    CampagneRepository, CampagneRow, Campagne, CampagneData,
    campagnes, from_campagne, into_campagne
);

referentiel_repository!(
    /// Repository for services municipaux
    ServiceRepository, ServiceRow, ServiceMunicipal, ServiceData,
    services, from_service, into_service
);

referentiel_repository!(
    /// Repository for utilisateurs
    UtilisateurRepository, UtilisateurRow, Utilisateur, UtilisateurData,
    utilisateurs, from_utilisateur, into_utilisateur
);
