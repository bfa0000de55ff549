//! Field splitting for single result-sheet lines
//!
//! A quote character toggles "inside quotes" mode, which suppresses comma
//! splitting. Quotes are never emitted, so a value cannot contain a literal
//! quote: there is no doubled-quote escape.

use crate::constants::{FIELD_SEPARATOR, QUOTE};

/// Split one line into raw fields on unquoted commas.
///
/// Always yields one more field than there are unquoted commas, so an empty
/// line produces a single empty field.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut in_quotes = false;
    let mut current = String::new();

    for ch in line.chars() {
        if ch == QUOTE {
            in_quotes = !in_quotes;
        } else if ch == FIELD_SEPARATOR && !in_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    fields.push(current);

    fields
}

/// Strip every quote character and surrounding whitespace from a raw field
pub fn clean_field(raw: &str) -> String {
    raw.replace(QUOTE, "").trim().to_string()
}

/// Split and clean a line in one pass over the scanner output
pub fn split_clean_fields(line: &str) -> Vec<String> {
    split_fields(line)
        .iter()
        .map(|field| clean_field(field))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_split() {
        assert_eq!(split_fields("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_quoted_comma_is_kept() {
        assert_eq!(
            split_fields(r#"101,"Doe, Jane",5"#),
            vec!["101", "Doe, Jane", "5"]
        );
    }

    #[test]
    fn test_trailing_comma_yields_empty_field() {
        assert_eq!(split_fields("a,b,"), vec!["a", "b", ""]);
        assert_eq!(split_fields(""), vec![""]);
    }

    #[test]
    fn test_doubled_quote_is_not_an_escape() {
        // The two inner quotes just toggle twice
        assert_eq!(split_fields(r#""say ""hi"", ok",x"#), vec!["say hi, ok", "x"]);
    }

    #[test]
    fn test_unbalanced_quote_swallows_rest_of_line() {
        assert_eq!(split_fields(r#"1,"open,2,3"#), vec!["1", "open,2,3"]);
    }

    #[test]
    fn test_clean_field() {
        assert_eq!(clean_field("  Rahul Sharma "), "Rahul Sharma");
        assert_eq!(clean_field(r#" "PASS" "#), "PASS");
        assert_eq!(clean_field(r#"ab"c"#), "abc");
    }

    #[test]
    fn test_split_clean_fields() {
        assert_eq!(
            split_clean_fields(r#" 101 , "Rahul" ,5"#),
            vec!["101", "Rahul", "5"]
        );
    }
}
