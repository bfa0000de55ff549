//! Built-in sample sheet for trying the portal without a published sheet

use crate::config::PortalConfig;
use crate::constants::{DEMO_COLLEGE_NAME, SHEET_COLUMNS};
use crate::error::Result;
use crate::locator::find_by_key;
use crate::parser::parse;
use crate::portal::LookupOutcome;
use crate::query::LookupQuery;
use crate::source::{CsvSource, MemorySource};

/// Hint appended to "no result" messages in demo mode
pub const DEMO_HINT: &str = "Demo Mode Tip: Try 101 for 5th, 205 for 6th, or 312 for 7th";

// roll_no, student_name, standard, marathi, hindi, english, maths, science, total, result
const DEMO_ROWS: &[&str] = &[
    "101,Rahul Sharma,5,78,82,88,92,85,425,PASS",
    "102,Priya Patel,5,65,70,75,80,72,362,PASS",
    "201,Amit Kumar,6,42,55,60,38,50,245,FAIL",
    "205,Sneha Gupta,6,85,78,90,88,82,423,PASS",
    "301,Rohan Desai,7,30,42,55,28,45,200,FAIL",
    "312,Neha Singh,7,92,88,95,96,90,461,PASS",
    "401,Vikram Joshi,8,72,68,75,80,78,373,PASS",
    "501,Anjali Mehta,9,88,85,92,90,87,442,PASS",
    "601,Rajesh Nair,10,40,52,58,45,50,245,FAIL",
];

/// The sample sheet as CSV text in canonical column order
pub fn demo_csv() -> String {
    let mut lines = Vec::with_capacity(DEMO_ROWS.len() + 1);
    lines.push(SHEET_COLUMNS.join(","));
    lines.extend(DEMO_ROWS.iter().map(|row| row.to_string()));
    lines.join("\n")
}

/// The sample sheet as a source
pub fn demo_source() -> MemorySource {
    MemorySource::new("demo sheet", demo_csv())
}

/// Answer a lookup from the sample sheet.
///
/// The college only supplies the name on the marksheet; an id missing from
/// the registry falls back to a generic demo name instead of failing.
pub fn demo_lookup(config: &PortalConfig, query: &LookupQuery) -> Result<LookupOutcome> {
    let college_name = config
        .college(query.college())
        .map(|college| college.name.clone())
        .unwrap_or_else(|_| DEMO_COLLEGE_NAME.to_string());

    let records = parse(&demo_source().fetch_text()?);

    Ok(match find_by_key(&records, &query.natural_key()) {
        Some(record) => LookupOutcome::Found {
            record: record.clone(),
            college_name,
        },
        None => LookupOutcome::NotFound {
            message: format!("{}\n\n{}", query.not_found_message(), DEMO_HINT),
        },
    })
}
