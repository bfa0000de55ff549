//! Core data structures for result lookup.
//!
//! A [`Record`] is one materialized row of a result sheet. Known columns land
//! in typed fields; anything else the sheet carries is kept as text in
//! [`Record::extra`].

use crate::constants::{
    ENGLISH, HINDI, MARATHI, MATHS, RESULT, ROLL_NO, SCIENCE, STANDARD, STUDENT_NAME, TOTAL,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Value of a single cell after the column type policy has been applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(value) => Some(*value),
            FieldValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Number(_) => None,
            FieldValue::Text(value) => Some(value),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(value) => f.write_str(&format_number(*value)),
            FieldValue::Text(value) => f.write_str(value),
        }
    }
}

/// Format a number the way a spreadsheet shows it: whole numbers without a
/// trailing ".0"
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// One student's row from a published result sheet
///
/// Every field is optional: a short row leaves trailing columns unset rather
/// than failing. Rows only become records once they carry a roll number and
/// a name (see [`Record::is_materializable`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll_no: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marathi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hindi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub english: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maths: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub science: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,

    /// Columns the sheet carries beyond the known set, by normalized name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a typed value under a normalized column name.
    ///
    /// Known numeric columns only accept numbers and known text columns only
    /// accept text; a mismatched value is stored as text in `extra` so nothing
    /// is silently lost. Unknown columns always go to `extra`.
    pub fn set_field(&mut self, column: &str, value: FieldValue) {
        match (column, value) {
            (ROLL_NO, FieldValue::Number(n)) => self.roll_no = Some(n),
            (STANDARD, FieldValue::Number(n)) => self.standard = Some(n),
            (MARATHI, FieldValue::Number(n)) => self.marathi = Some(n),
            (HINDI, FieldValue::Number(n)) => self.hindi = Some(n),
            (ENGLISH, FieldValue::Number(n)) => self.english = Some(n),
            (MATHS, FieldValue::Number(n)) => self.maths = Some(n),
            (SCIENCE, FieldValue::Number(n)) => self.science = Some(n),
            (TOTAL, FieldValue::Number(n)) => self.total = Some(n),
            (STUDENT_NAME, FieldValue::Text(s)) => self.student_name = Some(s),
            (RESULT, FieldValue::Text(s)) => self.result = Some(s),
            (other, value) => {
                self.extra.insert(other.to_string(), value.to_string());
            }
        }
    }

    /// Look up a field by normalized column name
    pub fn field(&self, column: &str) -> Option<FieldValue> {
        let number = |value: Option<f64>| value.map(FieldValue::Number);
        let text = |value: &Option<String>| value.clone().map(FieldValue::Text);

        match column {
            ROLL_NO => number(self.roll_no),
            STANDARD => number(self.standard),
            MARATHI => number(self.marathi),
            HINDI => number(self.hindi),
            ENGLISH => number(self.english),
            MATHS => number(self.maths),
            SCIENCE => number(self.science),
            TOTAL => number(self.total),
            STUDENT_NAME => text(&self.student_name),
            RESULT => text(&self.result),
            other => self.extra.get(other).cloned().map(FieldValue::Text),
        }
    }

    /// A row is kept only with a non-zero roll number and a non-empty name
    pub fn is_materializable(&self) -> bool {
        let has_roll_no = self.roll_no.is_some_and(|n| n != 0.0);
        let has_name = self
            .student_name
            .as_deref()
            .is_some_and(|name| !name.is_empty());
        has_roll_no && has_name
    }

    /// Display name, or an empty string when unset
    pub fn name(&self) -> &str {
        self.student_name.as_deref().unwrap_or_default()
    }

    /// Result status, or an empty string when unset
    pub fn status(&self) -> &str {
        self.result.as_deref().unwrap_or_default()
    }
}
