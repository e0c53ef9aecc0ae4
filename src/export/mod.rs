//! Serialization of the accumulated result set.
//!
//! Two formats: an XLSX workbook and an XML document, both named
//! `{keyword}_{city}_businesses` with the format's extension. Exporting an
//! empty result set is refused before any file is touched, and a failed write
//! never disturbs the in-memory store, so a retry is always safe.

pub mod markup;
pub mod tabular;

use crate::error::ScrapeError;
use crate::model::{BusinessRecord, ExportFormat, SearchQuery};
use std::path::{Path, PathBuf};

/// Write the records into `dir` and return the absolute file path.
pub fn export_into(
    dir: &Path,
    records: &[BusinessRecord],
    query: &SearchQuery,
    format: ExportFormat,
) -> Result<PathBuf, ScrapeError> {
    if records.is_empty() {
        return Err(ScrapeError::EmptyExport);
    }
    let path = dir.join(format!("{}.{}", query.file_stem(), format.extension()));
    match format {
        ExportFormat::Xlsx => tabular::write_xlsx(records, &path)?,
        ExportFormat::Xml => markup::write_xml(records, &path)?,
    }
    Ok(path)
}

/// Export into the current working directory.
pub fn export(
    records: &[BusinessRecord],
    query: &SearchQuery,
    format: ExportFormat,
) -> Result<PathBuf, ScrapeError> {
    let dir = std::env::current_dir()?;
    export_into(&dir, records, query, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth;

    #[test]
    fn empty_store_is_refused_before_any_file_io() {
        let query = SearchQuery::parse("hotel", "Paris").unwrap();
        let dir = std::env::temp_dir();
        for format in [ExportFormat::Xlsx, ExportFormat::Xml] {
            let err = export_into(&dir, &[], &query, format).unwrap_err();
            assert!(matches!(err, ScrapeError::EmptyExport));
            let path = dir.join(format!("{}.{}", query.file_stem(), format.extension()));
            assert!(!path.exists(), "file was created for empty export");
        }
    }

    #[test]
    fn export_writes_named_files() {
        let query = SearchQuery::parse("gym", "Tokyo").unwrap();
        let records = synth::synthesize(&query).iter().cloned().collect::<Vec<_>>();
        let dir = std::env::temp_dir();
        for format in [ExportFormat::Xlsx, ExportFormat::Xml] {
            let path = export_into(&dir, &records, &query, format).unwrap();
            assert_eq!(
                path.file_name().and_then(|n| n.to_str()),
                Some(format!("gym_Tokyo_businesses.{}", format.extension()).as_str())
            );
            assert!(std::fs::metadata(&path).unwrap().len() > 0);
            let _ = std::fs::remove_file(&path);
        }
    }
}
