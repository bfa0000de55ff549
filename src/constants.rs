//! Application constants for the result portal
//!
//! Column names of the published result sheet, grading thresholds and the
//! default college registry.

// =============================================================================
// Result Sheet Columns
// =============================================================================

/// Identifier-number column (roll number)
pub const ROLL_NO: &str = "roll_no";

/// Display-name column
pub const STUDENT_NAME: &str = "student_name";

/// Grade-level column (standard/class)
pub const STANDARD: &str = "standard";

/// Subject score columns in sheet order
pub const MARATHI: &str = "marathi";
pub const HINDI: &str = "hindi";
pub const ENGLISH: &str = "english";
pub const MATHS: &str = "maths";
pub const SCIENCE: &str = "science";

/// Aggregate score column
pub const TOTAL: &str = "total";

/// Pass/fail status column
pub const RESULT: &str = "result";

/// Canonical column order of a published result sheet
pub const SHEET_COLUMNS: &[&str] = &[
    ROLL_NO,
    STUDENT_NAME,
    STANDARD,
    MARATHI,
    HINDI,
    ENGLISH,
    MATHS,
    SCIENCE,
    TOTAL,
    RESULT,
];

/// Columns coerced to numbers; every other column is kept as text
pub const NUMERIC_COLUMNS: &[&str] = &[
    ROLL_NO, STANDARD, MARATHI, HINDI, ENGLISH, MATHS, SCIENCE, TOTAL,
];

/// Check whether a normalized header name is one of the numeric columns
pub fn is_numeric_column(name: &str) -> bool {
    NUMERIC_COLUMNS
        .iter()
        .any(|column| column.eq_ignore_ascii_case(name))
}

// =============================================================================
// CSV Syntax
// =============================================================================

/// Row separator
pub const LINE_SEPARATOR: char = '\n';

/// Field separator
pub const FIELD_SEPARATOR: char = ',';

/// Quote character; always toggles quoting and is never part of a value
pub const QUOTE: char = '"';

/// UTF-8 byte order mark stripped from fetched text
pub const BYTE_ORDER_MARK: char = '\u{feff}';

// =============================================================================
// Grading
// =============================================================================

/// Minimum marks for a subject to count as passed
pub const SUBJECT_PASS_MARK: f64 = 35.0;

/// Maximum attainable total across the five subjects
pub const MAX_TOTAL_MARKS: u32 = 500;

/// Result status that counts as an overall pass (compared lowercase)
pub const PASS_STATUS: &str = "pass";

/// Subjects shown on a marksheet: (column, display name)
pub const MARKSHEET_SUBJECTS: &[(&str, &str)] = &[
    (MARATHI, "Marathi"),
    (HINDI, "Hindi"),
    (ENGLISH, "English"),
    (MATHS, "Mathematics"),
    (SCIENCE, "Science"),
];

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Directory under the user config dir holding the portal config
pub const CONFIG_DIR_NAME: &str = "result-portal";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default timeout for remote sheet requests
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Built-in college registry: (id, name, published CSV URL)
pub const DEFAULT_COLLEGES: &[(&str, &str, &str)] = &[
    (
        "college1",
        "Springfield Public School",
        "https://docs.google.com/spreadsheets/d/1YOUR_SHEET_ID_1/gviz/tq?tqx=out:csv",
    ),
    (
        "college2",
        "Greenwood High School",
        "https://docs.google.com/spreadsheets/d/1YOUR_SHEET_ID_2/gviz/tq?tqx=out:csv",
    ),
    (
        "college3",
        "Riverdale College",
        "https://docs.google.com/spreadsheets/d/1YOUR_SHEET_ID_3/gviz/tq?tqx=out:csv",
    ),
];

/// College name used for demo lookups
pub const DEMO_COLLEGE_NAME: &str = "Demo College";
