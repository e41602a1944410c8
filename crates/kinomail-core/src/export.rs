//! File exporters for collected film records
//!
//! Three independent writers over the same ordered record sequence: JSON,
//! CSV, and XLSX. All three share the column order of
//! [`Film::FIELD_NAMES`] and write exactly what the collector produced,
//! with no validation or transformation.

use std::fs;
use std::path::Path;

use rust_xlsxwriter::Workbook;
use tracing::info;

use crate::error::Result;
use crate::types::Film;

/// Base output file name for a run, without extension.
///
/// The run's three files are this name plus `.json`, `.csv`, and `.xlsx`.
pub fn output_basename(count: u32) -> String {
    format!("kino_mail_top_{}_films", count)
}

/// Write the records as a JSON array of objects.
///
/// Human-readable indentation; non-ASCII text is written literally, not
/// escaped.
pub fn write_json(films: &[Film], path: &Path) -> Result<()> {
    let mut json = serde_json::to_string_pretty(films)?;
    json.push('\n');
    fs::write(path, json)?;

    info!(records = films.len(), path = %path.display(), "JSON export written");
    Ok(())
}

/// Write the records as a CSV table.
///
/// Header row holds the field names in record-definition order, then one
/// data row per record. No index column.
pub fn write_csv(films: &[Film], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for film in films {
        writer.serialize(film)?;
    }
    writer.flush()?;

    info!(records = films.len(), path = %path.display(), "CSV export written");
    Ok(())
}

/// Write the records as an XLSX workbook with a single worksheet.
///
/// Same table shape as the CSV export; every cell is written as text, so
/// numeric-looking years and ratings stay strings.
pub fn write_xlsx(films: &[Film], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in Film::FIELD_NAMES.iter().enumerate() {
        worksheet.write_string(0, col as u16, *name)?;
    }
    for (row, film) in films.iter().enumerate() {
        for (col, value) in film.row().iter().enumerate() {
            worksheet.write_string(row as u32 + 1, col as u16, *value)?;
        }
    }

    workbook.save(path)?;

    info!(records = films.len(), path = %path.display(), "XLSX export written");
    Ok(())
}
