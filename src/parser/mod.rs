//! Tolerant CSV parser for published result sheets
//!
//! Turns the raw text of a spreadsheet CSV export into typed [`Record`]s.
//! Parsing never fails: blank lines are skipped and rows without a roll
//! number or a student name are dropped and counted.
//!
//! ## Architecture
//!
//! - [`line_scanner`] - quote-aware field splitting and cell cleaning
//! - [`column_mapping`] - header row analysis and column typing
//! - [`field_parsers`] - lenient number and integer coercion
//! - [`record_parser`] - single row to record conversion
//! - [`stats`] - parse counters and result structures
//!
//! ## Usage
//!
//! ```rust
//! use result_portal::parser::parse;
//!
//! let text = "roll_no,student_name,standard\n101,Rahul Sharma,5";
//! let records = parse(text);
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].name(), "Rahul Sharma");
//! ```

pub mod column_mapping;
pub mod field_parsers;
pub mod line_scanner;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

use tracing::{debug, info, warn};

use crate::constants::LINE_SEPARATOR;
use crate::models::Record;

pub use column_mapping::{Column, ColumnKind, ColumnMapping};
pub use record_parser::RowRejection;
pub use stats::{ParseResult, ParseStats};

/// Parse a result sheet and return its records in input order
pub fn parse(text: &str) -> Vec<Record> {
    parse_with_stats(text).records
}

/// Parse a result sheet, keeping row-level statistics
pub fn parse_with_stats(text: &str) -> ParseResult {
    let lines: Vec<&str> = text.split(LINE_SEPARATOR).collect();

    if lines.len() < 2 {
        debug!("Result sheet has no data rows");
        return ParseResult::default();
    }

    let mapping = ColumnMapping::from_header_line(lines[0]);
    let (total_cols, numeric_cols, text_cols) = mapping.stats();
    debug!(
        "Column mapping: {} total, {} numeric, {} text",
        total_cols, numeric_cols, text_cols
    );
    if !mapping.is_lookup_ready() {
        warn!("Header lacks roll_no or student_name column; every row will be dropped");
    }

    let mut records = Vec::new();
    let mut stats = ParseStats::new();

    for (index, raw_line) in lines.iter().enumerate().skip(1) {
        let line = raw_line.trim();
        if line.is_empty() {
            stats.blank_rows += 1;
            continue;
        }

        stats.total_rows += 1;
        let row_number = index + 1;

        match record_parser::parse_record_line(line, &mapping) {
            Ok(record) => {
                records.push(record);
                stats.records_parsed += 1;
            }
            Err(rejection) => {
                stats.rows_dropped += 1;
                stats
                    .drop_reasons
                    .push(format!("Row {}: {}", row_number, rejection));
                debug!("Dropped row {}: {}", row_number, rejection);
            }
        }
    }

    info!(
        "Parsed {} records from {} rows ({} dropped)",
        stats.records_parsed, stats.total_rows, stats.rows_dropped
    );

    ParseResult { records, stats }
}
