//! Result lookup orchestration
//!
//! Runs one lookup end to end: resolve the college, fetch its sheet, parse
//! it, and locate the student. Each lookup re-fetches and re-parses; nothing
//! is cached between calls.

use serde::Serialize;
use tracing::{debug, info};

use crate::config::{College, PortalConfig};
use crate::error::Result;
use crate::locator::find_by_key;
use crate::marksheet::Marksheet;
use crate::models::Record;
use crate::parser::parse_with_stats;
use crate::query::LookupQuery;
use crate::source::{CsvSource, source_for};

/// Builds the source for a college's sheet
pub type SourceFactory = Box<dyn Fn(&College, u64) -> Result<Box<dyn CsvSource>>>;

/// Outcome of a completed lookup. "Not found" is a normal outcome, not an
/// error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LookupOutcome {
    Found {
        record: Record,
        college_name: String,
    },
    NotFound {
        message: String,
    },
}

impl LookupOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found { .. })
    }

    /// Marksheet for a found record
    pub fn marksheet(&self) -> Option<Marksheet> {
        match self {
            LookupOutcome::Found {
                record,
                college_name,
            } => Some(Marksheet::from_record(record, college_name.as_str())),
            LookupOutcome::NotFound { .. } => None,
        }
    }
}

/// Result portal over a configured college registry
pub struct ResultPortal {
    config: PortalConfig,
    source_factory: SourceFactory,
}

impl ResultPortal {
    /// Create a portal that reads each college's configured location
    pub fn new(config: PortalConfig) -> Self {
        Self {
            config,
            source_factory: Box::new(|college: &College, timeout: u64| {
                source_for(&college.csv_url, timeout)
            }),
        }
    }

    /// Replace how sheet sources are built
    pub fn with_source_factory(
        mut self,
        factory: impl Fn(&College, u64) -> Result<Box<dyn CsvSource>> + 'static,
    ) -> Self {
        self.source_factory = Box::new(factory);
        self
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// Look up one student's result
    pub fn check_result(&self, query: &LookupQuery) -> Result<LookupOutcome> {
        let college = self.config.college(query.college())?;
        let source = (self.source_factory)(college, self.config.request_timeout_secs)?;
        info!(
            "Looking up roll number {} in standard {} at {} ({})",
            query.roll_number(),
            query.standard(),
            college.name,
            source.describe()
        );

        let text = source.fetch_text()?;
        let parsed = parse_with_stats(&text);
        debug!(
            "Sheet for {}: {} records, {} rows dropped",
            college.id, parsed.stats.records_parsed, parsed.stats.rows_dropped
        );

        let outcome = match find_by_key(&parsed.records, &query.natural_key()) {
            Some(record) => LookupOutcome::Found {
                record: record.clone(),
                college_name: college.name.clone(),
            },
            None => LookupOutcome::NotFound {
                message: query.not_found_message(),
            },
        };

        Ok(outcome)
    }
}

impl std::fmt::Debug for ResultPortal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultPortal")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
