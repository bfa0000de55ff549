//! Test fixtures shared by the result-sheet parser tests

// Test modules
mod parser_tests;

/// Canonical header of a published result sheet
pub const CANONICAL_HEADER: &str =
    "roll_no,student_name,standard,marathi,hindi,english,maths,science,total,result";

/// Two-student sheet in the canonical column order
pub fn create_two_student_sheet() -> String {
    format!(
        "{}\n101,Rahul Sharma,5,78,82,88,92,85,425,PASS\n205,Sneha Gupta,6,85,78,90,88,82,423,PASS",
        CANONICAL_HEADER
    )
}

/// Sheet mixing good rows with blank, short and malformed ones
pub fn create_messy_sheet() -> String {
    [
        "Roll_No, Student_Name ,STANDARD,Marathi,Hindi,English,Maths,Science,Total,Result\r",
        "101,\"Doe, Jane\",5,78,82,88,92,85,425,PASS\r",
        "",
        "   ",
        "102,,5,65,70,75,80,72,362,PASS",
        ",Ghost Student,5,1,1,1,1,1,5,FAIL",
        "103,Short Row,5",
        "abc,Bad Roll,5,1,2,3,4,5,15,FAIL",
        "104,\"Quoted\" Name,6,40,40,40,40,40,200,PASS",
    ]
    .join("\n")
}
