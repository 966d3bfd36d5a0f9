//! CSV export
//!
//! Semicolon-separated, UTF-8 with leading byte-order mark. Free-text fields
//! are wrapped in double quotes with internal quotes doubled; amounts, dates
//! and statuses are written bare.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::{format_amount, DEMANDE_LABELS, DEPENSE_LABELS, OPERATION_LABELS};
use crate::models::{Demande, Depense, Operation};

const BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Wrap a free-text field in double quotes, doubling internal quotes
fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn write_line<W: Write>(writer: &mut W, line: &str) -> BudgetResult<()> {
    writeln!(writer, "{}", line).map_err(|e| BudgetError::Export(e.to_string()))
}

/// Export demandes as semicolon-delimited CSV
pub fn export_demandes_csv<W: Write>(demandes: &[Demande], writer: &mut W) -> BudgetResult<()> {
    writer
        .write_all(BOM)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    write_line(writer, &DEMANDE_LABELS.join(";"))?;

    for demande in demandes {
        write_line(
            writer,
            &format!(
                "{};{};{};{};{};{};{};{};{}",
                quote(&demande.service),
                quote(&demande.domaine),
                demande.categorie,
                quote(&demande.description),
                quote(&demande.justification),
                format_amount(demande.budget_titre),
                format_amount(demande.budget_valide),
                demande.statut,
                demande.date_creation,
            ),
        )?;
    }

    Ok(())
}

/// Export dépenses as semicolon-delimited CSV
pub fn export_depenses_csv<W: Write>(depenses: &[Depense], writer: &mut W) -> BudgetResult<()> {
    writer
        .write_all(BOM)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    write_line(writer, &DEPENSE_LABELS.join(";"))?;

    for depense in depenses {
        write_line(
            writer,
            &format!(
                "{};{};{};{};{};{}",
                quote(&depense.service),
                quote(&depense.operation),
                depense.date,
                quote(&depense.description),
                format_amount(depense.montant_ttc),
                quote(&depense.fournisseur),
            ),
        )?;
    }

    Ok(())
}

/// Export opérations as semicolon-delimited CSV
pub fn export_operations_csv<W: Write>(
    operations: &[Operation],
    writer: &mut W,
) -> BudgetResult<()> {
    writer
        .write_all(BOM)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    write_line(writer, &OPERATION_LABELS.join(";"))?;

    for operation in operations {
        write_line(
            writer,
            &format!(
                "{};{};{};{};{};{}",
                quote(&operation.nom),
                quote(&operation.description),
                format_amount(operation.budget_prevu),
                format_amount(operation.depenses),
                quote(&operation.periode),
                operation.statut,
            ),
        )?;
    }

    Ok(())
}
