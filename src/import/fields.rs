//! Untyped imported rows and header-alias field resolution
//!
//! Imported files have no fixed schema: column names vary by spelling,
//! casing, accents, and historic verbosity. A row is modelled as a
//! string-keyed mapping of loosely-typed cells; `resolve_field` is the single
//! typed boundary that probes an ordered list of accepted header aliases and
//! hands back trimmed text. Adding a new accepted header is a data change in
//! the `aliases` tables, never a logic change.

use std::collections::HashMap;

/// A loosely-typed cell value from a CSV field or spreadsheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Textual cell
    Text(String),
    /// Numeric cell (spreadsheets deliver numbers directly)
    Number(f64),
    /// Blank cell
    Empty,
}

impl RawValue {
    /// Coerce to text, `None` for falsy values (blank text, zero, empty cell)
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            Self::Number(n) => {
                if *n == 0.0 {
                    None
                } else if n.fract() == 0.0 && n.abs() < 1e15 {
                    Some(format!("{}", *n as i64))
                } else {
                    Some(format!("{}", n))
                }
            }
            Self::Empty => None,
        }
    }
}

/// One imported record: column header → cell value
pub type RawRecord = HashMap<String, RawValue>;

/// Probe `record` for each alias in order (exact, case- and accent-sensitive
/// key match) and return the first present non-falsy value as trimmed text.
pub fn resolve_field(record: &RawRecord, aliases: &[&str]) -> Option<String> {
    for alias in aliases {
        if let Some(value) = record.get(*alias) {
            if let Some(text) = value.as_text() {
                return Some(text);
            }
        }
    }
    None
}

/// Like [`resolve_field`], with a fallback default
pub fn resolve_field_or(record: &RawRecord, aliases: &[&str], default: &str) -> String {
    resolve_field(record, aliases).unwrap_or_else(|| default.to_string())
}

/// Accepted header spellings per logical field.
///
/// Order matters: the first present alias wins. Lists include the canonical
/// export labels, all-caps variants seen in commission spreadsheets, and the
/// verbose historical headers of earlier budget files.
pub mod aliases {
    /// Demande import headers
    pub mod demande {
        pub const SERVICE: &[&str] = &["SERVICE", "Service", "service"];
        pub const DOMAINE: &[&str] =
            &["DOMAINE", "Domaine", "domaine", "Domaine d'intervention"];
        pub const CATEGORIE: &[&str] = &[
            "CATEGORIE",
            "CATÉGORIE",
            "Catégorie",
            "Categorie",
            "categorie",
        ];
        pub const DESCRIPTION: &[&str] = &[
            "DESCRIPTION",
            "Description",
            "description",
            "LIBELLE",
            "Libellé",
        ];
        pub const JUSTIFICATION: &[&str] =
            &["JUSTIFICATION", "Justification", "justification"];
        pub const BUDGET_TITRE: &[&str] = &[
            "BUDGET ",
            "BUDGET",
            "Budget titre",
            "BUDGET TITRE",
            "Budget demandé",
            "MONTANT DEMANDE",
        ];
        pub const BUDGET_VALIDE: &[&str] = &[
            "BUDGET VALIDE",
            "BUDGET VALIDÉ",
            "Budget validé",
            "Budget valide",
            "MONTANT RETENU APRES ARBITRAGE DE LA COMMISSION",
            "Montant validé",
        ];
        pub const STATUT: &[&str] = &["STATUT", "Statut", "statut", "ETAT", "État"];
        pub const DATE_CREATION: &[&str] = &[
            "DATE CREATION",
            "Date création",
            "Date creation",
            "date_creation",
            "DATE",
        ];
    }

    /// Dépense import headers
    pub mod depense {
        pub const SERVICE: &[&str] = &["SERVICE", "Service", "service"];
        pub const OPERATION: &[&str] =
            &["OPERATION", "OPÉRATION", "Opération", "Operation", "operation"];
        pub const DATE: &[&str] = &["DATE", "Date", "date"];
        pub const DESCRIPTION: &[&str] = &[
            "DESCRIPTION",
            "Description",
            "description",
            "LIBELLE",
            "Libellé",
        ];
        pub const MONTANT_TTC: &[&str] = &[
            "MONTANT TTC",
            "Montant TTC",
            "MONTANT",
            "Montant",
            "montant_ttc",
        ];
        pub const FOURNISSEUR: &[&str] =
            &["FOURNISSEUR", "Fournisseur", "fournisseur"];
    }

    /// Opération import headers
    pub mod operation {
        pub const NOM: &[&str] = &["NOM", "Nom", "nom", "LIBELLE", "Libellé"];
        pub const DESCRIPTION: &[&str] =
            &["DESCRIPTION", "Description", "description"];
        pub const BUDGET_PREVU: &[&str] = &[
            "BUDGET PREVU",
            "BUDGET PRÉVU",
            "Budget prévu",
            "Budget prevu",
            "budget_prevu",
        ];
        pub const DEPENSES: &[&str] =
            &["DEPENSES", "DÉPENSES", "Dépenses", "Depenses", "depenses"];
        pub const PERIODE: &[&str] =
            &["PERIODE", "PÉRIODE", "Période", "Periode", "periode"];
        pub const STATUT: &[&str] = &["STATUT", "Statut", "statut", "ETAT", "État"];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, RawValue)]) -> RawRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_resolves_later_alias() {
        let record = record(&[(
            "Budget titre",
            RawValue::Text("15000".into()),
        )]);
        let resolved = resolve_field(&record, aliases::demande::BUDGET_TITRE);
        assert_eq!(resolved, Some("15000".to_string()));
    }

    #[test]
    fn test_first_alias_wins() {
        let record = record(&[
            ("BUDGET", RawValue::Text("1".into())),
            ("Budget titre", RawValue::Text("2".into())),
        ]);
        let resolved = resolve_field(&record, aliases::demande::BUDGET_TITRE);
        assert_eq!(resolved, Some("1".to_string()));
    }

    #[test]
    fn test_no_alias_matches_uses_default() {
        let record = record(&[("Colonne inconnue", RawValue::Text("x".into()))]);
        assert_eq!(resolve_field(&record, aliases::demande::SERVICE), None);
        assert_eq!(
            resolve_field_or(&record, aliases::demande::SERVICE, "Direction"),
            "Direction"
        );
    }

    #[test]
    fn test_blank_value_is_absent() {
        let record = record(&[
            ("STATUT", RawValue::Text("   ".into())),
            ("Statut", RawValue::Text("Validé".into())),
        ]);
        let resolved = resolve_field(&record, aliases::demande::STATUT);
        assert_eq!(resolved, Some("Validé".to_string()));
    }

    #[test]
    fn test_case_sensitive_match() {
        // "service" (lowercase) must not satisfy the "SERVICE" alias alone;
        // it is matched by its own entry further down the list.
        let record = record(&[("service", RawValue::Text("Finances".into()))]);
        let resolved = resolve_field(&record, aliases::demande::SERVICE);
        assert_eq!(resolved, Some("Finances".to_string()));
    }

    #[test]
    fn test_numeric_cell_coerced_to_text() {
        let record = record(&[("MONTANT TTC", RawValue::Number(4500.0))]);
        let resolved = resolve_field(&record, aliases::depense::MONTANT_TTC);
        assert_eq!(resolved, Some("4500".to_string()));
    }

    #[test]
    fn test_trims_resolved_text() {
        let record = record(&[("Service", RawValue::Text("  Finances  ".into()))]);
        let resolved = resolve_field(&record, aliases::demande::SERVICE);
        assert_eq!(resolved, Some("Finances".to_string()));
    }
}
