//! Marksheet derivation for a located record
//!
//! Works out what a marksheet shows: per-subject pass/fail, the total out of
//! the maximum and the overall status. Producing HTML or print output is left
//! to the caller.

use std::fmt;

use serde::Serialize;

use crate::constants::{MARKSHEET_SUBJECTS, MAX_TOTAL_MARKS, PASS_STATUS, SUBJECT_PASS_MARK};
use crate::models::{Record, format_number};

/// One subject line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectResult {
    pub subject: &'static str,
    /// `None` when the sheet row had no cell for this subject
    pub marks: Option<f64>,
    pub passed: bool,
}

impl SubjectResult {
    pub fn outcome(&self) -> &'static str {
        if self.passed { "Pass" } else { "Fail" }
    }
}

/// Everything a marksheet displays for one student
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marksheet {
    pub college_name: String,
    pub student_name: String,
    pub roll_no: Option<f64>,
    pub standard: Option<f64>,
    pub subjects: Vec<SubjectResult>,
    pub total: Option<f64>,
    pub max_total: u32,
    /// Result status exactly as published
    pub status: String,
    pub passed: bool,
}

impl Marksheet {
    pub fn from_record(record: &Record, college_name: impl Into<String>) -> Self {
        let subjects = MARKSHEET_SUBJECTS
            .iter()
            .map(|&(column, subject)| {
                let marks = record.field(column).and_then(|value| value.as_number());
                SubjectResult {
                    subject,
                    marks,
                    passed: marks.is_some_and(|m| m >= SUBJECT_PASS_MARK),
                }
            })
            .collect();

        let status = record.status().to_string();
        let passed = status.to_lowercase() == PASS_STATUS;

        Self {
            college_name: college_name.into(),
            student_name: record.name().to_string(),
            roll_no: record.roll_no,
            standard: record.standard,
            subjects,
            total: record.total,
            max_total: MAX_TOTAL_MARKS,
            status,
            passed,
        }
    }

    /// Lowercase status, used as a style class by renderers
    pub fn status_class(&self) -> String {
        self.status.to_lowercase()
    }

    /// Total rendered as "obtained/maximum"
    pub fn total_display(&self) -> String {
        format!("{}/{}", display_marks(self.total), self.max_total)
    }
}

fn display_marks(marks: Option<f64>) -> String {
    marks.map(format_number).unwrap_or_else(|| "-".to_string())
}

impl fmt::Display for Marksheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Marksheet - {}", self.college_name)?;
        writeln!(f, "Student Name : {}", self.student_name)?;
        writeln!(f, "Roll Number  : {}", display_marks(self.roll_no))?;
        writeln!(f, "Standard     : {}th", display_marks(self.standard))?;
        writeln!(f)?;
        writeln!(f, "{:<14} {:>14}  {}", "Subject", "Marks Obtained", "Status")?;
        for subject in &self.subjects {
            writeln!(
                f,
                "{:<14} {:>14}  {}",
                subject.subject,
                display_marks(subject.marks),
                subject.outcome()
            )?;
        }
        write!(
            f,
            "{:<14} {:>14}  {}",
            "Total Marks",
            self.total_display(),
            self.status
        )
    }
}
