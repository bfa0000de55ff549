//! Validation of the result lookup form
//!
//! The form has three inputs: college, standard and roll number. Checks run
//! in form order and stop at the first failure, so the user always sees the
//! message for the earliest field that needs attention.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{PortalError, Result};
use crate::locator::NaturalKey;

// ASCII digits only; `\d` would also accept other scripts' digits
static ROLL_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("roll number pattern is valid"));

/// A validated result lookup request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    college: String,
    standard: String,
    roll_number: String,
}

impl LookupQuery {
    /// Validate raw form inputs
    pub fn new(college: &str, standard: &str, roll_number: &str) -> Result<Self> {
        let college = college.trim();
        let standard = standard.trim();
        let roll_number = roll_number.trim();

        if college.is_empty() {
            return Err(PortalError::invalid_query("Please select a college/school"));
        }
        if standard.is_empty() {
            return Err(PortalError::invalid_query("Please select a standard/class"));
        }
        if roll_number.is_empty() {
            return Err(PortalError::invalid_query("Please enter your roll number"));
        }
        if !ROLL_NUMBER_PATTERN.is_match(roll_number) {
            return Err(PortalError::invalid_query(
                "Roll number should contain numbers only",
            ));
        }

        Ok(Self {
            college: college.to_string(),
            standard: standard.to_string(),
            roll_number: roll_number.to_string(),
        })
    }

    pub fn college(&self) -> &str {
        &self.college
    }

    pub fn standard(&self) -> &str {
        &self.standard
    }

    pub fn roll_number(&self) -> &str {
        &self.roll_number
    }

    /// Key used to locate the student's record
    pub fn natural_key(&self) -> NaturalKey {
        NaturalKey::new(&self.standard, &self.roll_number)
    }

    /// Message shown when the sheet holds no matching record
    pub fn not_found_message(&self) -> String {
        format!(
            "No result found for Roll Number: {} in {}th Standard",
            self.roll_number, self.standard
        )
    }
}
