//! XLSX export: one worksheet, a header row, one row per record.

use crate::error::ScrapeError;
use crate::model::BusinessRecord;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

pub const SHEET_NAME: &str = "Business Data";

/// Record fields rendered to display strings, one entry per record, columns
/// in declared field order. Shared by the table view and the export tests.
pub fn rows(records: &[BusinessRecord]) -> Vec<[String; 8]> {
    records
        .iter()
        .map(|r| {
            [
                r.id.clone(),
                r.name.clone(),
                r.phone.clone(),
                r.email.clone(),
                r.website.clone(),
                r.address.clone(),
                r.rating.to_string(),
                r.reviews.to_string(),
            ]
        })
        .collect()
}

fn build_workbook(records: &[BusinessRecord]) -> Result<Workbook, ScrapeError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, field) in BusinessRecord::FIELDS.iter().enumerate() {
        sheet.write_with_format(0, col as u16, *field, &bold)?;
    }
    for (i, r) in records.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write(row, 0, &r.id)?;
        sheet.write(row, 1, &r.name)?;
        sheet.write(row, 2, &r.phone)?;
        sheet.write(row, 3, &r.email)?;
        sheet.write(row, 4, &r.website)?;
        sheet.write(row, 5, &r.address)?;
        sheet.write(row, 6, r.rating)?;
        sheet.write(row, 7, r.reviews)?;
    }
    Ok(workbook)
}

pub fn write_xlsx(records: &[BusinessRecord], path: &Path) -> Result<(), ScrapeError> {
    build_workbook(records)?.save(path)?;
    Ok(())
}
