//! Result Portal Library
//!
//! Looks up a student's exam result in a college's published result sheet
//! (a spreadsheet exported as CSV) and derives the marksheet.
//!
//! This library provides tools for:
//! - Tolerant parsing of result-sheet CSV with quoted fields and header-driven columns
//! - Locating a record by its (standard, roll number) natural key
//! - Validating lookup form input
//! - Fetching sheets from local files, memory, or (with the `http` feature) URLs
//! - A college registry loaded from layered configuration
//!
//! ```rust
//! use result_portal::{find, parse};
//!
//! let text = "roll_no,student_name,standard,marathi,hindi,english,maths,science,total,result\n\
//!             101,Rahul Sharma,5,78,82,88,92,85,425,PASS\n\
//!             205,Sneha Gupta,6,85,78,90,88,82,423,PASS";
//!
//! let records = parse(text);
//! let student = find(&records, "5", "101").expect("record exists");
//! assert_eq!(student.name(), "Rahul Sharma");
//! assert_eq!(student.total, Some(425.0));
//! assert!(find(&records, "6", "999").is_none());
//! ```

pub mod config;
pub mod constants;
pub mod demo;
pub mod error;
pub mod locator;
pub mod marksheet;
pub mod models;
pub mod parser;
pub mod portal;
pub mod query;
pub mod source;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::{College, PortalConfig};
pub use error::{PortalError, Result};
pub use locator::{KeyValue, NaturalKey, find};
pub use marksheet::Marksheet;
pub use models::{FieldValue, Record};
pub use parser::{ParseResult, ParseStats, parse, parse_with_stats};
pub use portal::{LookupOutcome, ResultPortal};
pub use query::LookupQuery;
pub use source::{CsvSource, FileSource, MemorySource};
