//! Record location by natural key
//!
//! A student is identified by the pair (standard, roll number). Both search
//! keys arrive as form text, so each side of the comparison is normalized
//! through [`KeyValue`]: integers when both sides have an integer reading,
//! trimmed text otherwise.

use std::fmt;

use tracing::debug;

use crate::models::{Record, format_number};
use crate::parser::field_parsers::{number_to_int, parse_int_prefix};

/// One side of a key comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyValue {
    Integer(i64),
    Text(String),
}

impl KeyValue {
    /// Normalize a search key typed by the user
    pub fn from_input(raw: &str) -> Self {
        match parse_int_prefix(raw) {
            Some(value) => KeyValue::Integer(value),
            None => KeyValue::Text(raw.trim().to_string()),
        }
    }

    /// Normalize a stored numeric field
    pub fn from_number(value: f64) -> Self {
        match number_to_int(value) {
            Some(integer) => KeyValue::Integer(integer),
            None => KeyValue::Text(format_number(value)),
        }
    }

    /// Integers compare numerically; any other pairing compares as text
    pub fn matches(&self, other: &KeyValue) -> bool {
        match (self, other) {
            (KeyValue::Integer(a), KeyValue::Integer(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyValue::Integer(value) => write!(f, "{}", value),
            KeyValue::Text(value) => f.write_str(value.trim()),
        }
    }
}

/// The (standard, roll number) pair that identifies a student
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaturalKey {
    pub standard: KeyValue,
    pub roll_number: KeyValue,
}

impl NaturalKey {
    pub fn new(standard: &str, roll_number: &str) -> Self {
        Self {
            standard: KeyValue::from_input(standard),
            roll_number: KeyValue::from_input(roll_number),
        }
    }

    /// Check a record against both key parts. A record with either field
    /// unset never matches.
    pub fn matches(&self, record: &Record) -> bool {
        let (Some(standard), Some(roll_no)) = (record.standard, record.roll_no) else {
            return false;
        };

        KeyValue::from_number(standard).matches(&self.standard)
            && KeyValue::from_number(roll_no).matches(&self.roll_number)
    }
}

/// Find the first record, in input order, matching both search keys.
///
/// Returns `None` when nothing matches; later duplicates of a matching key
/// are never consulted.
pub fn find<'a>(records: &'a [Record], standard: &str, roll_number: &str) -> Option<&'a Record> {
    find_by_key(records, &NaturalKey::new(standard, roll_number))
}

/// [`find`] with an already normalized key
pub fn find_by_key<'a>(records: &'a [Record], key: &NaturalKey) -> Option<&'a Record> {
    let found = records.iter().find(|record| key.matches(record));

    match found {
        Some(record) => debug!(
            "Located roll number {} in standard {}: {}",
            key.roll_number,
            key.standard,
            record.name()
        ),
        None => debug!(
            "No record for roll number {} in standard {} among {} records",
            key.roll_number,
            key.standard,
            records.len()
        ),
    }

    found
}
