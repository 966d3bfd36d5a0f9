//! Import pipeline: file bytes → ordered raw records
//!
//! Format is detected by filename extension. CSV files are semicolon
//! separated with one header row; double-quote-wrapped fields are unescaped
//! by the reader. XLSX workbooks contribute the first worksheet, keyed by its
//! header row. Any decode failure aborts the whole file: the batch either
//! fully parses or the caller sees one error and nothing is imported.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::{BudgetError, BudgetResult};
use crate::import::fields::{RawRecord, RawValue};

/// Supported import file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    /// Semicolon-delimited text
    Csv,
    /// Spreadsheet workbook
    Xlsx,
}

impl ImportFormat {
    /// Detect the format from the filename extension
    pub fn from_path(path: &Path) -> BudgetResult<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .as_deref()
        {
            Some("csv") => Ok(Self::Csv),
            Some("xlsx") | Some("xls") | Some("xlsm") => Ok(Self::Xlsx),
            _ => Err(BudgetError::Import(format!(
                "Unsupported file format: {} (expected .csv or .xlsx)",
                path.display()
            ))),
        }
    }
}

/// Read an import file into an ordered sequence of raw records.
pub fn read_records(path: &Path) -> BudgetResult<Vec<RawRecord>> {
    if !path.exists() {
        return Err(BudgetError::Import(format!(
            "File not found: {}",
            path.display()
        )));
    }

    match ImportFormat::from_path(path)? {
        ImportFormat::Csv => {
            let bytes = std::fs::read(path)
                .map_err(|e| BudgetError::Import(format!("Failed to read file: {}", e)))?;
            read_csv_records(&bytes)
        }
        ImportFormat::Xlsx => read_xlsx_records(path),
    }
}

/// Decode semicolon-delimited text into header-keyed records.
pub fn read_csv_records(bytes: &[u8]) -> BudgetResult<Vec<RawRecord>> {
    // Strip the UTF-8 byte-order mark our own exports (and Excel) prepend
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| BudgetError::Import(format!("Failed to read CSV header: {}", e)))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let record =
            result.map_err(|e| BudgetError::Import(format!("Failed to parse CSV row: {}", e)))?;

        let mut raw = RawRecord::new();
        for (header, field) in headers.iter().zip(record.iter()) {
            raw.insert(header.clone(), RawValue::Text(field.to_string()));
        }
        records.push(raw);
    }

    Ok(records)
}

/// Decode the first worksheet of a workbook into header-keyed records.
fn read_xlsx_records(path: &Path) -> BudgetResult<Vec<RawRecord>> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| BudgetError::Import(format!("Failed to open workbook: {}", e)))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| BudgetError::Import("Workbook has no worksheets".into()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| BudgetError::Import(format!("Failed to read worksheet: {}", e)))?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(Vec::new());
    };

    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    let mut records = Vec::new();
    for row in rows {
        let mut raw = RawRecord::new();
        for (header, cell) in headers.iter().zip(row.iter()) {
            if header.is_empty() {
                continue;
            }
            raw.insert(header.clone(), cell_to_raw(cell));
        }
        // Fully blank rows carry no information
        if raw.values().any(|v| v.as_text().is_some()) {
            records.push(raw);
        }
    }

    Ok(records)
}

fn cell_to_raw(cell: &Data) -> RawValue {
    match cell {
        Data::Empty => RawValue::Empty,
        Data::String(s) => RawValue::Text(s.clone()),
        Data::Float(f) => RawValue::Number(*f),
        Data::Int(i) => RawValue::Number(*i as f64),
        Data::Bool(b) => RawValue::Text(b.to_string()),
        Data::DateTime(dt) => RawValue::Text(
            dt.as_datetime()
                .map(|d| d.date().to_string())
                .unwrap_or_default(),
        ),
        Data::DateTimeIso(s) | Data::DurationIso(s) => RawValue::Text(s.clone()),
        Data::Error(_) => RawValue::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::row::map_demande_row;
    use crate::models::{Categorie, StatutDemande};
    use chrono::NaiveDate;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ImportFormat::from_path(Path::new("demandes.csv")).unwrap(),
            ImportFormat::Csv
        );
        assert_eq!(
            ImportFormat::from_path(Path::new("Demandes_2024.XLSX")).unwrap(),
            ImportFormat::Xlsx
        );
        assert!(ImportFormat::from_path(Path::new("demandes.pdf")).is_err());
        assert!(ImportFormat::from_path(Path::new("demandes")).is_err());
    }

    #[test]
    fn test_read_csv_records() {
        let csv = "Service;Domaine;Description\nDirection;Administration;Ordinateurs\nFinances;;Formation";
        let records = read_csv_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].get("Service"),
            Some(&RawValue::Text("Direction".into()))
        );
        assert_eq!(
            records[1].get("Domaine"),
            Some(&RawValue::Text("".into()))
        );
    }

    #[test]
    fn test_bom_is_stripped() {
        let csv = "\u{feff}Service;Description\nDirection;Test";
        let records = read_csv_records(csv.as_bytes()).unwrap();
        assert_eq!(
            records[0].get("Service"),
            Some(&RawValue::Text("Direction".into()))
        );
    }

    #[test]
    fn test_quoted_fields_unescaped() {
        let csv = "Service;Description\nDirection;\"Achat; pose \"\"complète\"\"\"";
        let records = read_csv_records(csv.as_bytes()).unwrap();
        assert_eq!(
            records[0].get("Description"),
            Some(&RawValue::Text("Achat; pose \"complète\"".into()))
        );
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = read_records(Path::new("/nonexistent/demandes.csv")).unwrap_err();
        assert!(matches!(err, BudgetError::Import(_)));
    }

    /// The end-to-end demande scenario: heterogeneous headers, French
    /// amounts, blank statut.
    #[test]
    fn test_end_to_end_demande_row() {
        let csv = "Service;Domaine;Categorie;Description;Justification;BUDGET ;BUDGET VALIDE;Statut;Date création\n\
                   SERVICE TECHNIQUE;Voirie;Investissement;Repavage;Usure;\"1 000,00 €\";0;;2024-01-01";
        let records = read_csv_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);

        let demande = map_demande_row(&records[0]);
        assert_eq!(demande.service, "Service Technique");
        assert_eq!(demande.categorie, Categorie::Investissement);
        assert_eq!(demande.budget_titre, 1000.0);
        assert_eq!(demande.budget_valide, 0.0);
        assert_eq!(demande.statut, StatutDemande::Brouillon);
        assert_eq!(
            demande.date_creation,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }
}
