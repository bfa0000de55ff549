//! Parsing statistics and result structures for result sheets
//!
//! Malformed rows are dropped rather than raised; these counters make the
//! drops visible to callers that care.

use crate::models::Record;

/// Parsed records together with parsing statistics
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    /// Materialized records in input order
    pub records: Vec<Record>,

    /// Row-level parsing statistics
    pub stats: ParseStats,
}

/// Row counters for one parse
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Non-blank data rows encountered (header excluded)
    pub total_rows: usize,

    /// Blank or whitespace-only lines that were skipped
    pub blank_rows: usize,

    /// Rows that became records
    pub records_parsed: usize,

    /// Non-blank rows dropped for missing roll number or name
    pub rows_dropped: usize,

    /// One entry per dropped row, e.g. "Row 4: missing student name"
    pub drop_reasons: Vec<String>,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of non-blank rows that became records, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// True when every non-blank row produced a record
    pub fn is_clean(&self) -> bool {
        self.rows_dropped == 0
    }
}
