use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("please enter a search keyword")]
    EmptyKeyword,

    #[error("please enter a city")]
    EmptyCity,

    #[error("no data to export")]
    EmptyExport,

    #[error("XLSX write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    /// Validation failures block a run start without touching any state.
    pub fn is_validation(&self) -> bool {
        matches!(self, ScrapeError::EmptyKeyword | ScrapeError::EmptyCity)
    }
}
