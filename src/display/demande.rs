//! Demande display formatting

use crate::models::Demande;

use super::{cell_width, format_currency, format_date_fr, pad, pad_right_align};

/// Format a list of demandes as a table
pub fn format_demande_list(demandes: &[Demande]) -> String {
    if demandes.is_empty() {
        return "Aucune demande.".to_string();
    }

    let service_width = demandes
        .iter()
        .map(|d| cell_width(&d.service))
        .max()
        .unwrap_or(7)
        .max(7);
    let description_width = demandes
        .iter()
        .map(|d| cell_width(&d.description))
        .max()
        .unwrap_or(11)
        .max(11)
        .min(48);

    let mut output = String::new();
    output.push_str(&format!(
        "{}  {}  {:>12}  {:>12}  {:<10}  {}\n",
        pad("Service", service_width),
        pad("Description", description_width),
        "Demandé",
        "Validé",
        "Statut",
        "Date",
    ));
    output.push_str(&format!(
        "{}  {}  {:->12}  {:->12}  {:-<10}  {:-<10}\n",
        "-".repeat(service_width),
        "-".repeat(description_width),
        "",
        "",
        "",
        "",
    ));

    for demande in demandes {
        let description: String = if cell_width(&demande.description) > description_width {
            let truncated: String = demande
                .description
                .chars()
                .take(description_width - 1)
                .collect();
            format!("{}…", truncated)
        } else {
            demande.description.clone()
        };

        output.push_str(&format!(
            "{}  {}  {}  {}  {}  {}\n",
            pad(&demande.service, service_width),
            pad(&description, description_width),
            pad_right_align(&format_currency(demande.budget_titre), 12),
            pad_right_align(&format_currency(demande.budget_valide), 12),
            pad(&demande.statut.to_string(), 10),
            format_date_fr(demande.date_creation),
        ));
    }

    output
}

/// Format a single demande's details
pub fn format_demande_details(demande: &Demande) -> String {
    let mut output = String::new();

    output.push_str(&format!("Demande: {}\n", demande.description));
    output.push_str(&format!("  ID:             {}\n", demande.id));
    output.push_str(&format!("  Service:        {}\n", demande.service));
    output.push_str(&format!("  Domaine:        {}\n", demande.domaine));
    output.push_str(&format!("  Catégorie:      {}\n", demande.categorie));
    output.push_str(&format!(
        "  Budget demandé: {}\n",
        format_currency(demande.budget_titre)
    ));
    output.push_str(&format!(
        "  Budget validé:  {}\n",
        format_currency(demande.budget_valide)
    ));
    output.push_str(&format!("  Statut:         {}\n", demande.statut));
    output.push_str(&format!(
        "  Créée le:       {}\n",
        format_date_fr(demande.date_creation)
    ));

    if !demande.justification.is_empty() {
        output.push_str(&format!("  Justification:  {}\n", demande.justification));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Categorie, StatutDemande};
    use chrono::NaiveDate;

    fn sample() -> Demande {
        Demande::new(
            "Médiathèque",
            "Culture",
            Categorie::Fonctionnement,
            "Acquisition de nouveaux ouvrages",
            "Enrichissement du fonds",
            8500.0,
            8500.0,
            StatutDemande::Valide,
            NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
        )
    }

    #[test]
    fn test_format_list() {
        let output = format_demande_list(&[sample()]);
        assert!(output.contains("Médiathèque"));
        assert!(output.contains("8 500 €"));
        assert!(output.contains("Validé"));
        assert!(output.contains("10/02/2024"));
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_demande_list(&[]), "Aucune demande.");
    }

    #[test]
    fn test_format_details() {
        let output = format_demande_details(&sample());
        assert!(output.contains("Fonctionnement"));
        assert!(output.contains("Enrichissement du fonds"));
    }
}
