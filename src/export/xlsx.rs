//! XLSX export
//!
//! One worksheet per export, named after the entity type, with fixed column
//! labels and display widths.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::error::BudgetResult;
use crate::export::{DEMANDE_LABELS, DEPENSE_LABELS, OPERATION_LABELS};
use crate::models::{Demande, Depense, Operation};

const DEMANDE_WIDTHS: [f64; 9] = [22.0, 18.0, 15.0, 40.0, 30.0, 14.0, 14.0, 12.0, 13.0];
const DEPENSE_WIDTHS: [f64; 6] = [22.0, 30.0, 12.0, 40.0, 14.0, 22.0];
const OPERATION_WIDTHS: [f64; 6] = [35.0, 40.0, 14.0, 14.0, 12.0, 12.0];

fn write_header(
    sheet: &mut Worksheet,
    labels: &[&str],
    widths: &[f64],
) -> BudgetResult<()> {
    let bold = Format::new().set_bold();
    for (col, (label, width)) in labels.iter().zip(widths).enumerate() {
        let col = col as u16;
        sheet.set_column_width(col, *width)?;
        sheet.write_string_with_format(0, col, *label, &bold)?;
    }
    Ok(())
}

/// Export demandes to a single-sheet workbook at `path`
pub fn export_demandes_xlsx(demandes: &[Demande], path: &Path) -> BudgetResult<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Demandes")?;

    write_header(sheet, &DEMANDE_LABELS, &DEMANDE_WIDTHS)?;

    for (i, demande) in demandes.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, demande.service.as_str())?;
        sheet.write_string(row, 1, demande.domaine.as_str())?;
        sheet.write_string(row, 2, demande.categorie.to_string())?;
        sheet.write_string(row, 3, demande.description.as_str())?;
        sheet.write_string(row, 4, demande.justification.as_str())?;
        sheet.write_number(row, 5, demande.budget_titre)?;
        sheet.write_number(row, 6, demande.budget_valide)?;
        sheet.write_string(row, 7, demande.statut.to_string())?;
        sheet.write_string(row, 8, demande.date_creation.to_string())?;
    }

    workbook.save(path)?;
    Ok(())
}

/// Export dépenses to a single-sheet workbook at `path`
pub fn export_depenses_xlsx(depenses: &[Depense], path: &Path) -> BudgetResult<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Depenses")?;

    write_header(sheet, &DEPENSE_LABELS, &DEPENSE_WIDTHS)?;

    for (i, depense) in depenses.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, depense.service.as_str())?;
        sheet.write_string(row, 1, depense.operation.as_str())?;
        sheet.write_string(row, 2, depense.date.to_string())?;
        sheet.write_string(row, 3, depense.description.as_str())?;
        sheet.write_number(row, 4, depense.montant_ttc)?;
        sheet.write_string(row, 5, depense.fournisseur.as_str())?;
    }

    workbook.save(path)?;
    Ok(())
}

/// Export opérations to a single-sheet workbook at `path`
pub fn export_operations_xlsx(operations: &[Operation], path: &Path) -> BudgetResult<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Operations")?;

    write_header(sheet, &OPERATION_LABELS, &OPERATION_WIDTHS)?;

    for (i, operation) in operations.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, operation.nom.as_str())?;
        sheet.write_string(row, 1, operation.description.as_str())?;
        sheet.write_number(row, 2, operation.budget_prevu)?;
        sheet.write_number(row, 3, operation.depenses)?;
        sheet.write_string(row, 4, operation.periode.as_str())?;
        sheet.write_string(row, 5, operation.statut.to_string())?;
    }

    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::pipeline::read_records;
    use crate::import::row::map_demande_row;
    use crate::models::{Categorie, StatutDemande};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_xlsx_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("demandes_2024-01-01.xlsx");

        let original = Demande::new(
            "Service Technique",
            "Voirie",
            Categorie::Investissement,
            "Repavage",
            "Usure",
            1000.0,
            0.0,
            StatutDemande::EnAttente,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );

        export_demandes_xlsx(std::slice::from_ref(&original), &path).unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 1);

        let reimported = map_demande_row(&records[0]);
        assert_eq!(reimported.service, original.service);
        assert_eq!(reimported.categorie, original.categorie);
        assert_eq!(reimported.description, original.description);
        assert_eq!(reimported.budget_titre, original.budget_titre);
        assert_eq!(reimported.budget_valide, original.budget_valide);
        assert_eq!(reimported.statut, original.statut);
        assert_eq!(reimported.date_creation, original.date_creation);
    }

    #[test]
    fn test_empty_collection_writes_header_only() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("operations.xlsx");

        export_operations_xlsx(&[], &path).unwrap();
        assert!(path.exists());

        let records = read_records(&path).unwrap();
        assert!(records.is_empty());
    }
}
