//! Opération display formatting

use crate::models::Operation;

use super::{cell_width, format_currency, pad, pad_right_align};

/// Format a list of opérations as a table
pub fn format_operation_list(operations: &[Operation]) -> String {
    if operations.is_empty() {
        return "Aucune opération.".to_string();
    }

    let nom_width = operations
        .iter()
        .map(|o| cell_width(&o.nom))
        .max()
        .unwrap_or(3)
        .max(3)
        .min(48);

    let mut output = String::new();
    output.push_str(&format!(
        "{}  {:<9}  {:>12}  {:>12}  {:>12}  {}\n",
        pad("Nom", nom_width),
        "Période",
        "Prévu",
        "Dépensé",
        "Reste",
        "Statut",
    ));
    output.push_str(&format!(
        "{}  {:-<9}  {:->12}  {:->12}  {:->12}  {:-<10}\n",
        "-".repeat(nom_width),
        "",
        "",
        "",
        "",
        "",
    ));

    for operation in operations {
        let nom: String = if cell_width(&operation.nom) > nom_width {
            let truncated: String = operation.nom.chars().take(nom_width - 1).collect();
            format!("{}…", truncated)
        } else {
            operation.nom.clone()
        };

        output.push_str(&format!(
            "{}  {:<9}  {}  {}  {}  {}\n",
            pad(&nom, nom_width),
            operation.periode,
            pad_right_align(&format_currency(operation.budget_prevu), 12),
            pad_right_align(&format_currency(operation.depenses), 12),
            pad_right_align(&format_currency(operation.reste()), 12),
            operation.statut,
        ));
    }

    output
}

/// Format a single opération's details
pub fn format_operation_details(operation: &Operation) -> String {
    let mut output = String::new();

    output.push_str(&format!("Opération: {}\n", operation.nom));
    output.push_str(&format!("  ID:           {}\n", operation.id));
    output.push_str(&format!("  Période:      {}\n", operation.periode));
    output.push_str(&format!("  Statut:       {}\n", operation.statut));
    output.push_str(&format!(
        "  Budget prévu: {}\n",
        format_currency(operation.budget_prevu)
    ));
    output.push_str(&format!(
        "  Dépensé:      {}\n",
        format_currency(operation.depenses)
    ));
    output.push_str(&format!(
        "  Reste:        {}\n",
        format_currency(operation.reste())
    ));

    if !operation.description.is_empty() {
        output.push_str(&format!("  Description:  {}\n", operation.description));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatutOperation;

    #[test]
    fn test_format_list_shows_reste() {
        let operation = Operation::new(
            "Rénovation église Saint-Martin",
            "Toiture et vitraux",
            450000.0,
            125000.0,
            "2024-2026",
            StatutOperation::EnCours,
        );

        let output = format_operation_list(&[operation]);
        assert!(output.contains("450 000 €"));
        assert!(output.contains("325 000 €"));
        assert!(output.contains("En cours"));
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_operation_list(&[]), "Aucune opération.");
    }
}
