//! Référentiel seeding
//!
//! The `init` command installs the communal reference data: the eight
//! services (which double as the normalizer vocabulary), the budget
//! campaigns and the user accounts. Demandes, dépenses and opérations
//! start empty and are filled by hand or by import.

use chrono::NaiveDate;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Campagne, EtatCampagne, Role, ServiceMunicipal, Utilisateur};

use super::Store;

fn seed_services() -> Vec<ServiceMunicipal> {
    vec![
        ServiceMunicipal::new("Direction", "Anne GAVARD", "direction@commune.fr"),
        ServiceMunicipal::new("Service Technique", "Pierre MARTIN", "technique@commune.fr"),
        ServiceMunicipal::new("Finances", "Marie DUPONT", "finances@commune.fr"),
        ServiceMunicipal::new("Accueil à la population", "Jean DURAND", "accueil@commune.fr"),
        ServiceMunicipal::new("Ressources humaines", "Sophie BERNARD", "rh@commune.fr"),
        ServiceMunicipal::new("Médiathèque", "Claire PETIT", "mediatheque@commune.fr"),
        ServiceMunicipal::new("Enfance jeunesse", "Luc MOREAU", "enfance@commune.fr"),
        ServiceMunicipal::new("Restauration scolaire", "Nathalie ROUX", "restauration@commune.fr"),
    ]
}

fn seed_campagnes() -> BudgetResult<Vec<Campagne>> {
    let date = |y, m, d| {
        NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| BudgetError::Storage(format!("Invalid seed date {}-{}-{}", y, m, d)))
    };

    Ok(vec![
        Campagne::new(
            "Budget 2024",
            "2024",
            date(2023, 9, 1)?,
            date(2023, 12, 15)?,
            EtatCampagne::Cloture,
        ),
        Campagne::new(
            "Budget 2025",
            "2025",
            date(2024, 9, 1)?,
            date(2024, 12, 15)?,
            EtatCampagne::Ouvert,
        ),
        Campagne::new(
            "Budget 2026",
            "2026",
            date(2025, 9, 1)?,
            date(2025, 12, 15)?,
            EtatCampagne::EnPreparation,
        ),
    ])
}

fn seed_utilisateurs() -> Vec<Utilisateur> {
    vec![
        Utilisateur::new("Anne GAVARD", "a.gavard@commune.fr", "Direction", Role::Admin),
        Utilisateur::new(
            "Pierre MARTIN",
            "p.martin@commune.fr",
            "Service Technique",
            Role::Editeur,
        ),
        Utilisateur::new("Marie DUPONT", "m.dupont@commune.fr", "Finances", Role::Editeur),
        Utilisateur::new(
            "Jean DURAND",
            "j.durand@commune.fr",
            "Accueil à la population",
            Role::Lecteur,
        ),
        Utilisateur::new(
            "Sophie BERNARD",
            "s.bernard@commune.fr",
            "Ressources humaines",
            Role::Editeur,
        ),
    ]
}

/// Install the reference tables, replacing any previous content
pub fn seed_referentiel(store: &Store) -> BudgetResult<()> {
    store.services.replace_all(&seed_services())?;
    store.campagnes.replace_all(&seed_campagnes()?)?;
    store.utilisateurs.replace_all(&seed_utilisateurs())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BudgetPaths;
    use tempfile::TempDir;

    #[test]
    fn test_seed_installs_referentiel() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Store::new(&paths).unwrap();

        seed_referentiel(&store).unwrap();

        assert_eq!(store.services.count().unwrap(), 8);
        assert_eq!(store.campagnes.count().unwrap(), 3);
        assert_eq!(store.utilisateurs.count().unwrap(), 5);

        let services = store.services.list().unwrap();
        assert_eq!(services[0].nom, "Direction");
        assert_eq!(services[7].nom, "Restauration scolaire");

        let campagnes = store.campagnes.list().unwrap();
        assert_eq!(campagnes[1].etat, EtatCampagne::Ouvert);
    }

    #[test]
    fn test_seed_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Store::new(&paths).unwrap();

        seed_referentiel(&store).unwrap();
        seed_referentiel(&store).unwrap();

        assert_eq!(store.services.count().unwrap(), 8);
    }
}
