//! Display formatting for terminal output
//!
//! Hand-rolled table and detail views for each entity, plus French
//! formatting helpers for amounts and dates.

pub mod dashboard;
pub mod demande;
pub mod depense;
pub mod operation;
pub mod referentiel;

pub use dashboard::format_totals;
pub use demande::{format_demande_details, format_demande_list};
pub use depense::format_depense_list;
pub use operation::{format_operation_details, format_operation_list};
pub use referentiel::{format_campagne_list, format_service_list, format_utilisateur_list};

use chrono::NaiveDate;

/// Format an amount in euros, French style: grouped thousands, no decimals
///
/// `1500.0` becomes `"1 500 €"`, `-300.0` becomes `"-300 €"`.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let negative = rounded < 0;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{} €", grouped)
    } else {
        format!("{} €", grouped)
    }
}

/// Format a date the French way, `dd/mm/yyyy`
pub fn format_date_fr(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Visible width of a cell, in characters rather than bytes
pub(crate) fn cell_width(s: &str) -> usize {
    s.chars().count()
}

/// Left-pad or truncate to a fixed character width
pub(crate) fn pad(s: &str, width: usize) -> String {
    let len = cell_width(s);
    if len >= width {
        s.to_string()
    } else {
        let mut out = String::with_capacity(s.len() + width - len);
        out.push_str(s);
        for _ in len..width {
            out.push(' ');
        }
        out
    }
}

/// Right-align to a fixed character width
pub(crate) fn pad_right_align(s: &str, width: usize) -> String {
    let len = cell_width(s);
    if len >= width {
        s.to_string()
    } else {
        let mut out = String::with_capacity(s.len() + width - len);
        for _ in len..width {
            out.push(' ');
        }
        out.push_str(s);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "0 €");
        assert_eq!(format_currency(950.0), "950 €");
        assert_eq!(format_currency(1500.0), "1 500 €");
        assert_eq!(format_currency(2500000.0), "2 500 000 €");
    }

    #[test]
    fn test_format_currency_rounds_and_signs() {
        assert_eq!(format_currency(40.5), "41 €");
        assert_eq!(format_currency(-12000.0), "-12 000 €");
    }

    #[test]
    fn test_format_date_fr() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(format_date_fr(date), "15/01/2024");
    }

    #[test]
    fn test_pad_counts_chars_not_bytes() {
        assert_eq!(pad("Médiathèque", 12), "Médiathèque ");
        assert_eq!(pad_right_align("8 500 €", 10), "   8 500 €");
    }
}
