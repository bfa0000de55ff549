//! Individual row parsing for result sheets
//!
//! Zips the cleaned cells of one data line against the column mapping,
//! applies the numeric/text policy and decides whether the row becomes a
//! record.

use thiserror::Error;

use super::column_mapping::{ColumnKind, ColumnMapping};
use super::field_parsers::coerce_number;
use super::line_scanner::split_clean_fields;
use crate::models::{FieldValue, Record};

/// Why a non-blank row was left out of the result set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowRejection {
    #[error("missing roll number")]
    MissingRollNumber,

    #[error("missing student name")]
    MissingStudentName,
}

/// Parse one trimmed, non-empty data line into a record.
///
/// Extra cells beyond the header are ignored; columns without a cell stay
/// unset.
pub fn parse_record_line(
    line: &str,
    mapping: &ColumnMapping,
) -> std::result::Result<Record, RowRejection> {
    let values = split_clean_fields(line);
    let mut record = Record::new();

    for (column, value) in mapping.columns.iter().zip(values) {
        let typed = match column.kind {
            ColumnKind::Numeric => FieldValue::Number(coerce_number(&value)),
            ColumnKind::Text => FieldValue::Text(value),
        };
        record.set_field(&column.name, typed);
    }

    if record.is_materializable() {
        Ok(record)
    } else if !record.roll_no.is_some_and(|n| n != 0.0) {
        Err(RowRejection::MissingRollNumber)
    } else {
        Err(RowRejection::MissingStudentName)
    }
}
