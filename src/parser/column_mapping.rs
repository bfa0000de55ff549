//! Column mapping derived from the header row of a result sheet
//!
//! The field set is never hard-coded: every header cell becomes a column,
//! categorized as numeric when it names one of the known score/key columns
//! and as text otherwise.

use super::line_scanner::split_clean_fields;
use crate::constants::{ROLL_NO, STUDENT_NAME, is_numeric_column};

/// How values in a column are typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Coerced to a number, 0 when unreadable
    Numeric,
    /// Kept as a trimmed string
    Text,
}

/// A single named column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Normalized name: quotes stripped, trimmed, lowercase
    pub name: String,
    pub kind: ColumnKind,
}

/// Ordered columns of a result sheet, matched positionally against data rows
#[derive(Debug, Clone, Default)]
pub struct ColumnMapping {
    pub columns: Vec<Column>,
}

impl ColumnMapping {
    /// Analyze a raw header line
    pub fn from_header_line(line: &str) -> Self {
        let columns = split_clean_fields(line)
            .into_iter()
            .map(|cell| {
                let name = cell.to_lowercase();
                let kind = if is_numeric_column(&name) {
                    ColumnKind::Numeric
                } else {
                    ColumnKind::Text
                };
                Column { name, kind }
            })
            .collect();

        Self { columns }
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column.name == name)
    }

    /// Get the position of a column
    pub fn get_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.name == name)
    }

    /// Whether any row can ever materialize: both roll number and name
    /// columns must be present
    pub fn is_lookup_ready(&self) -> bool {
        self.has_column(ROLL_NO) && self.has_column(STUDENT_NAME)
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Get statistics about the column mapping: (total, numeric, text)
    pub fn stats(&self) -> (usize, usize, usize) {
        let numeric = self
            .columns
            .iter()
            .filter(|column| column.kind == ColumnKind::Numeric)
            .count();
        (self.columns.len(), numeric, self.columns.len() - numeric)
    }
}
