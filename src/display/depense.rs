//! Dépense display formatting

use crate::models::Depense;

use super::{cell_width, format_currency, format_date_fr, pad, pad_right_align};

/// Format a list of dépenses as a table, with a total row
pub fn format_depense_list(depenses: &[Depense]) -> String {
    if depenses.is_empty() {
        return "Aucune dépense.".to_string();
    }

    let service_width = depenses
        .iter()
        .map(|d| cell_width(&d.service))
        .max()
        .unwrap_or(7)
        .max(7);
    let description_width = depenses
        .iter()
        .map(|d| cell_width(&d.description))
        .max()
        .unwrap_or(11)
        .max(11)
        .min(40);
    let fournisseur_width = depenses
        .iter()
        .map(|d| cell_width(&d.fournisseur))
        .max()
        .unwrap_or(11)
        .max(11);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}  {}  {}  {:>12}  {}\n",
        "Date",
        pad("Service", service_width),
        pad("Description", description_width),
        "Montant TTC",
        pad("Fournisseur", fournisseur_width),
    ));
    output.push_str(&format!(
        "{:-<10}  {}  {}  {:->12}  {}\n",
        "",
        "-".repeat(service_width),
        "-".repeat(description_width),
        "",
        "-".repeat(fournisseur_width),
    ));

    for depense in depenses {
        let description: String = if cell_width(&depense.description) > description_width {
            let truncated: String = depense
                .description
                .chars()
                .take(description_width - 1)
                .collect();
            format!("{}…", truncated)
        } else {
            depense.description.clone()
        };

        output.push_str(&format!(
            "{:<10}  {}  {}  {}  {}\n",
            format_date_fr(depense.date),
            pad(&depense.service, service_width),
            pad(&description, description_width),
            pad_right_align(&format_currency(depense.montant_ttc), 12),
            pad(&depense.fournisseur, fournisseur_width),
        ));
    }

    let total: f64 = depenses.iter().map(|d| d.montant_ttc).sum();
    output.push_str(&format!(
        "{:-<10}  {}  {}  {:->12}\n",
        "",
        "-".repeat(service_width),
        "-".repeat(description_width),
        "",
    ));
    output.push_str(&format!(
        "{:<10}  {}  {}  {}\n",
        "TOTAL",
        pad("", service_width),
        pad("", description_width),
        pad_right_align(&format_currency(total), 12),
    ));

    output
}
