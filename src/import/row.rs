//! Row mappers: one imported record → one domain entity
//!
//! Pure and total: no record shape may cause a mapper to fail. Missing or
//! unparseable fields fall back to documented defaults (empty text, zero
//! amounts, initial statuses, today's date).

use chrono::{Local, NaiveDate};

use crate::import::amount::parse_amount_str;
use crate::import::fields::{aliases, resolve_field, RawRecord};
use crate::import::normalize::normalize_service_name;
use crate::models::{
    Categorie, Demande, Depense, Operation, StatutDemande, StatutOperation,
};

/// Parse a date with a ladder of common formats, defaulting to today
/// (local date) when absent or unparseable.
fn parse_date_or_today(raw: Option<String>) -> NaiveDate {
    let today = Local::now().date_naive();
    let Some(s) = raw else { return today };

    let formats = ["%Y-%m-%d", "%d/%m/%Y", "%d/%m/%y", "%Y/%m/%d", "%d-%m-%Y"];
    for format in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s.trim(), format) {
            return date;
        }
    }
    today
}

/// Resolve a field and run it through the amount parser; absent yields 0.
fn resolve_amount(record: &RawRecord, field_aliases: &[&str]) -> f64 {
    resolve_field(record, field_aliases)
        .map(|s| parse_amount_str(&s))
        .unwrap_or(0.0)
}

/// Map one imported record to a demande.
pub fn map_demande_row(record: &RawRecord) -> Demande {
    use aliases::demande as f;

    let service = normalize_service_name(
        &resolve_field(record, f::SERVICE).unwrap_or_default(),
    );
    let categorie = Categorie::from_untrusted(
        &resolve_field(record, f::CATEGORIE).unwrap_or_default(),
    );
    let statut = StatutDemande::from_untrusted(
        &resolve_field(record, f::STATUT).unwrap_or_default(),
    );

    Demande::new(
        service,
        resolve_field(record, f::DOMAINE).unwrap_or_default(),
        categorie,
        resolve_field(record, f::DESCRIPTION).unwrap_or_default(),
        resolve_field(record, f::JUSTIFICATION).unwrap_or_default(),
        resolve_amount(record, f::BUDGET_TITRE),
        resolve_amount(record, f::BUDGET_VALIDE),
        statut,
        parse_date_or_today(resolve_field(record, f::DATE_CREATION)),
    )
}

/// Map one imported record to a dépense.
pub fn map_depense_row(record: &RawRecord) -> Depense {
    use aliases::depense as f;

    let service = normalize_service_name(
        &resolve_field(record, f::SERVICE).unwrap_or_default(),
    );

    Depense::new(
        service,
        resolve_field(record, f::OPERATION).unwrap_or_default(),
        parse_date_or_today(resolve_field(record, f::DATE)),
        resolve_field(record, f::DESCRIPTION).unwrap_or_default(),
        resolve_amount(record, f::MONTANT_TTC),
        resolve_field(record, f::FOURNISSEUR).unwrap_or_default(),
    )
}

/// Map one imported record to an opération.
pub fn map_operation_row(record: &RawRecord) -> Operation {
    use aliases::operation as f;

    let statut = StatutOperation::from_untrusted(
        &resolve_field(record, f::STATUT).unwrap_or_default(),
    );

    Operation::new(
        resolve_field(record, f::NOM).unwrap_or_default(),
        resolve_field(record, f::DESCRIPTION).unwrap_or_default(),
        resolve_amount(record, f::BUDGET_PREVU),
        resolve_amount(record, f::DEPENSES),
        resolve_field(record, f::PERIODE).unwrap_or_default(),
        statut,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::fields::RawValue;

    fn record(pairs: &[(&str, &str)]) -> RawRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), RawValue::Text(v.to_string())))
            .collect()
    }

    #[test]
    fn test_investment_category() {
        let demande = map_demande_row(&record(&[
            ("Service", "SERVICE TECHNIQUE"),
            ("Categorie", "INVESTISSEMENT"),
            ("Description", "Repavage"),
        ]));
        assert_eq!(demande.categorie, Categorie::Investissement);
        assert_eq!(demande.service, "Service Technique");
    }

    #[test]
    fn test_unrecognized_statut_defaults_to_brouillon() {
        let demande = map_demande_row(&record(&[
            ("Service", "Finances"),
            ("Statut", "???"),
        ]));
        assert_eq!(demande.statut, StatutDemande::Brouillon);

        let demande = map_demande_row(&record(&[("Service", "Finances")]));
        assert_eq!(demande.statut, StatutDemande::Brouillon);
    }

    #[test]
    fn test_missing_date_defaults_to_today() {
        let demande = map_demande_row(&record(&[("Service", "Direction")]));
        assert_eq!(demande.date_creation, Local::now().date_naive());
    }

    #[test]
    fn test_unparseable_date_defaults_to_today() {
        let demande = map_demande_row(&record(&[
            ("Service", "Direction"),
            ("Date création", "lundi dernier"),
        ]));
        assert_eq!(demande.date_creation, Local::now().date_naive());
    }

    #[test]
    fn test_french_date_format() {
        let demande = map_demande_row(&record(&[
            ("Service", "Direction"),
            ("Date création", "15/01/2024"),
        ]));
        assert_eq!(
            demande.date_creation,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_amounts_via_parser() {
        let demande = map_demande_row(&record(&[
            ("Service", "Service Technique"),
            ("BUDGET ", "1 000,00 €"),
            ("BUDGET VALIDE", "0"),
        ]));
        assert_eq!(demande.budget_titre, 1000.0);
        assert_eq!(demande.budget_valide, 0.0);
    }

    #[test]
    fn test_total_on_empty_record() {
        let demande = map_demande_row(&RawRecord::new());
        assert_eq!(demande.service, "");
        assert_eq!(demande.budget_titre, 0.0);
        assert_eq!(demande.statut, StatutDemande::Brouillon);
        assert_eq!(demande.categorie, Categorie::Fonctionnement);

        let depense = map_depense_row(&RawRecord::new());
        assert_eq!(depense.montant_ttc, 0.0);

        let operation = map_operation_row(&RawRecord::new());
        assert_eq!(operation.statut, StatutOperation::Planifie);
    }

    #[test]
    fn test_depense_row() {
        let depense = map_depense_row(&record(&[
            ("Service", "mediatheque"),
            ("Date", "2024-02-08"),
            ("Description", "Livres et DVD"),
            ("Montant TTC", "2 300,00"),
            ("Fournisseur", "Librairie du Centre"),
        ]));
        assert_eq!(depense.service, "Médiathèque");
        assert_eq!(depense.montant_ttc, 2300.0);
        assert_eq!(
            depense.date,
            NaiveDate::from_ymd_opt(2024, 2, 8).unwrap()
        );
    }

    #[test]
    fn test_operation_row() {
        let operation = map_operation_row(&record(&[
            ("Nom", "Construction de la nouvelle école"),
            ("Budget prévu", "2 500 000"),
            ("Dépenses", "1800000"),
            ("Période", "2022-2024"),
            ("Statut", "En cours"),
        ]));
        assert_eq!(operation.budget_prevu, 2500000.0);
        assert_eq!(operation.depenses, 1800000.0);
        assert_eq!(operation.statut, StatutOperation::EnCours);
    }

    /// Mapping the canonical-field rendering of a mapped entity again yields
    /// the same entity (modulo id).
    #[test]
    fn test_idempotence() {
        let first = map_demande_row(&record(&[
            ("Service", "technique"),
            ("Domaine", "Voirie"),
            ("Categorie", "Investissement"),
            ("Description", "Repavage"),
            ("Justification", "Usure"),
            ("BUDGET ", "1 000,00 €"),
            ("Statut", "En attente"),
            ("Date création", "2024-01-01"),
        ]));

        let canonical = record(&[
            ("Service", &first.service),
            ("Domaine", &first.domaine),
            ("Catégorie", &first.categorie.to_string()),
            ("Description", &first.description),
            ("Justification", &first.justification),
            ("Budget titre", &first.budget_titre.to_string()),
            ("Budget validé", &first.budget_valide.to_string()),
            ("Statut", &first.statut.to_string()),
            ("Date création", &first.date_creation.to_string()),
        ]);
        let second = map_demande_row(&canonical);

        assert_eq!(second.service, first.service);
        assert_eq!(second.domaine, first.domaine);
        assert_eq!(second.categorie, first.categorie);
        assert_eq!(second.description, first.description);
        assert_eq!(second.justification, first.justification);
        assert_eq!(second.budget_titre, first.budget_titre);
        assert_eq!(second.budget_valide, first.budget_valide);
        assert_eq!(second.statut, first.statut);
        assert_eq!(second.date_creation, first.date_creation);
    }
}
