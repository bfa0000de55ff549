//! Tests for the main result-sheet parser functionality

use super::*;
use crate::parser::{parse, parse_with_stats};

#[test]
fn test_two_student_sheet() {
    let records = parse(&create_two_student_sheet());

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].roll_no, Some(101.0));
    assert_eq!(records[0].name(), "Rahul Sharma");
    assert_eq!(records[0].total, Some(425.0));
    assert_eq!(records[1].roll_no, Some(205.0));
    assert_eq!(records[1].standard, Some(6.0));
    assert_eq!(records[1].status(), "PASS");
}

#[test]
fn test_empty_and_header_only_input() {
    assert!(parse("").is_empty());
    assert!(parse(CANONICAL_HEADER).is_empty());
    assert!(parse(&format!("{}\n", CANONICAL_HEADER)).is_empty());
    assert!(parse(&format!("{}\n\n  \n", CANONICAL_HEADER)).is_empty());
}

#[test]
fn test_quoted_name_with_comma_stays_one_field() {
    let text = format!(
        "{}\n301,\"Doe, Jane\",7,30,42,55,28,45,200,FAIL",
        CANONICAL_HEADER
    );
    let records = parse(&text);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name(), "Doe, Jane");
    assert_eq!(records[0].standard, Some(7.0));
    assert_eq!(records[0].status(), "FAIL");
}

#[test]
fn test_messy_sheet_keeps_valid_rows_in_order() {
    let records = parse(&create_messy_sheet());
    let names: Vec<&str> = records.iter().map(|r| r.name()).collect();

    assert_eq!(names, vec!["Doe, Jane", "Short Row", "Quoted Name"]);
    assert_eq!(records[0].status(), "PASS");
    assert_eq!(records[1].total, None);
    assert_eq!(records[2].standard, Some(6.0));
}

#[test]
fn test_row_without_name_is_dropped() {
    let text = format!("{}\n102,,5,65,70,75,80,72,362,PASS", CANONICAL_HEADER);
    let result = parse_with_stats(&text);

    assert!(result.records.is_empty());
    assert_eq!(result.stats.rows_dropped, 1);
}

#[test]
fn test_duplicates_are_preserved() {
    let text = format!(
        "{}\n101,First Copy,5\n101,Second Copy,5",
        CANONICAL_HEADER
    );
    let records = parse(&text);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name(), "First Copy");
    assert_eq!(records[1].name(), "Second Copy");
}

#[test]
fn test_crlf_line_endings() {
    let text = create_two_student_sheet().replace('\n', "\r\n");
    let records = parse(&text);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].status(), "PASS");
    assert_eq!(records[1].status(), "PASS");
}

#[test]
fn test_reordered_columns_and_unknown_column() {
    let text = "Result,Remarks,Student_Name,Roll_No\nPASS,Good work,Asha Rao,17";
    let records = parse(text);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].roll_no, Some(17.0));
    assert_eq!(records[0].name(), "Asha Rao");
    assert_eq!(records[0].status(), "PASS");
    assert_eq!(
        records[0].extra.get("remarks").map(String::as_str),
        Some("Good work")
    );
    assert_eq!(records[0].standard, None);
}

#[test]
fn test_quoted_header_with_comma() {
    let text = "roll_no,\"student_name\",\"notes, misc\"\n5,Kiran,\"a, b\"";
    let records = parse(text);

    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].extra.get("notes, misc").map(String::as_str),
        Some("a, b")
    );
}

#[test]
fn test_header_without_key_columns_drops_everything() {
    let text = "name,standard\nRahul,5\nSneha,6";
    let result = parse_with_stats(text);

    assert!(result.records.is_empty());
    assert_eq!(result.stats.total_rows, 2);
    assert_eq!(result.stats.rows_dropped, 2);
}

#[test]
fn test_numeric_columns_coerce_leniently() {
    let text = format!("{}\n7,Meera,\" 8 \",91.5,AB,,x9,100,0,PASS", CANONICAL_HEADER);
    let records = parse(&text);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].standard, Some(8.0));
    assert_eq!(records[0].marathi, Some(91.5));
    assert_eq!(records[0].hindi, Some(0.0));
    assert_eq!(records[0].english, Some(0.0));
    assert_eq!(records[0].maths, Some(0.0));
    assert_eq!(records[0].total, Some(0.0));
}
