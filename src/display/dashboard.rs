//! Dashboard display formatting

use crate::services::Totals;

use super::format_currency;

/// Format the dashboard totals
pub fn format_totals(totals: &Totals) -> String {
    let mut output = String::new();

    output.push_str("Tableau de bord\n");
    output.push_str(&format!(
        "  Budget demandé:   {:>14}\n",
        format_currency(totals.budget_demande)
    ));
    output.push_str(&format!(
        "  Budget validé:    {:>14}\n",
        format_currency(totals.budget_valide)
    ));
    output.push_str(&format!(
        "  Total dépensé:    {:>14}\n",
        format_currency(totals.total_depenses)
    ));
    output.push_str(&format!(
        "  Reste à dépenser: {:>14}\n",
        format_currency(totals.reste_a_depenser)
    ));

    output
}
