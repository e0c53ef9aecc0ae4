use crate::error::ScrapeError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// One synthesized business listing.
///
/// Immutable once built; the emitter only ever clones and derives from these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub address: String,
    pub rating: f64,
    pub reviews: u32,
}

impl BusinessRecord {
    /// Field names in declared order, shared by the table view and both exporters.
    pub const FIELDS: [&'static str; 8] = [
        "id", "name", "phone", "email", "website", "address", "rating", "reviews",
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Delay between result emissions.
    #[serde(with = "humantime_serde")]
    pub tick_interval: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(1500),
        }
    }
}

/// Validated search input. Construct via [`SearchQuery::parse`] only, so any
/// instance is guaranteed to carry non-empty trimmed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub keyword: String,
    pub city: String,
}

impl SearchQuery {
    /// Trim and validate both fields; empty input is a user-facing error and
    /// must never reach the synthesizer.
    pub fn parse(keyword: &str, city: &str) -> Result<Self, ScrapeError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(ScrapeError::EmptyKeyword);
        }
        let city = city.trim();
        if city.is_empty() {
            return Err(ScrapeError::EmptyCity);
        }
        Ok(Self {
            keyword: keyword.to_string(),
            city: city.to_string(),
        })
    }

    /// Base name for exported files, extension added per format.
    pub fn file_stem(&self) -> String {
        format!("{}_{}_businesses", self.keyword, self.city)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Xlsx,
    Xml,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Xml => "xml",
        }
    }
}

/// Events emitted by the run controller and consumed by UI/CLI layers.
#[derive(Debug, Clone)]
pub enum RunEvent {
    RunStarted {
        query: SearchQuery,
    },
    /// A newly derived record was appended to the result store.
    Record {
        record: BusinessRecord,
        cursor: u64,
    },
    RunStopped {
        total: usize,
    },
    Exported {
        format: ExportFormat,
        path: PathBuf,
    },
    /// Human-readable status for UI/CLI layers, including recovered errors.
    Info(String),
}
