//! Lenient numeric coercion for result-sheet cells and search keys
//!
//! Sheets are hand-edited, so numbers are read from the longest valid
//! leading prefix ("92 marks" reads as 92) and anything unreadable becomes 0
//! instead of an error.

/// Coerce a cell to a number, defaulting to 0 when no number can be read
pub fn coerce_number(value: &str) -> f64 {
    match parse_float_prefix(value) {
        Some(number) if number != 0.0 && !number.is_nan() => number,
        _ => 0.0,
    }
}

/// Read the longest decimal literal at the start of `value`.
///
/// Leading whitespace is skipped. Accepts an optional sign, digits with an
/// optional fraction (`12`, `12.5`, `.5`, `12.`), an optional exponent, or
/// `Infinity`. Returns `None` when no digits are present.
pub fn parse_float_prefix(value: &str) -> Option<f64> {
    let bytes = value.trim_start().as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };
    let sign = if negative { -1.0 } else { 1.0 };

    if bytes[pos..].starts_with(b"Infinity") {
        return Some(sign * f64::INFINITY);
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &bytes[int_start..pos];

    let mut frac_digits: &[u8] = &[];
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &bytes[frac_start..end];
        if !int_digits.is_empty() || !frac_digits.is_empty() {
            pos = end;
        }
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut exponent: &[u8] = &[];
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut end = pos + 1;
        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > digits_start {
            exponent = &bytes[pos + 1..end];
        }
    }

    // All slices are ASCII, so the rebuilt literal is always valid UTF-8
    let literal = format!(
        "{}.{}e{}",
        ascii_or(int_digits, "0"),
        ascii_or(frac_digits, "0"),
        ascii_or(exponent, "0"),
    );
    literal.parse::<f64>().ok().map(|number| sign * number)
}

/// Read a base-10 integer prefix: optional sign followed by digits.
///
/// Returns `None` when there are no leading digits or the value does not
/// fit in an `i64`.
pub fn parse_int_prefix(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digit_count = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digit_count].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Truncate a stored number to an integer, if it has an integer reading
pub fn number_to_int(value: f64) -> Option<i64> {
    if value.is_finite() && value.abs() < i64::MAX as f64 {
        Some(value.trunc() as i64)
    } else {
        None
    }
}

fn ascii_or<'a>(digits: &'a [u8], fallback: &'a str) -> &'a str {
    if digits.is_empty() {
        fallback
    } else {
        std::str::from_utf8(digits).unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_plain_numbers() {
        assert_eq!(coerce_number("425"), 425.0);
        assert_eq!(coerce_number("82.5"), 82.5);
        assert_eq!(coerce_number("-7"), -7.0);
        assert_eq!(coerce_number("  92"), 92.0);
    }

    #[test]
    fn test_coerce_defaults_to_zero() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("AB"), 0.0);
        assert_eq!(coerce_number("-"), 0.0);
        assert_eq!(coerce_number("."), 0.0);
        assert_eq!(coerce_number("-0"), 0.0);
        assert!(coerce_number("-0").is_sign_positive());
    }

    #[test]
    fn test_coerce_uses_leading_prefix() {
        assert_eq!(coerce_number("92 marks"), 92.0);
        assert_eq!(coerce_number("12abc"), 12.0);
        assert_eq!(coerce_number("3.5.1"), 3.5);
        assert_eq!(coerce_number("1e2"), 100.0);
        assert_eq!(coerce_number("1e"), 1.0);
        assert_eq!(coerce_number("1e+"), 1.0);
    }

    #[test]
    fn test_float_prefix_forms() {
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("12."), Some(12.0));
        assert_eq!(parse_float_prefix("+4"), Some(4.0));
        assert_eq!(parse_float_prefix("2.5E-1"), Some(0.25));
        assert_eq!(parse_float_prefix("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_float_prefix("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_float_prefix("x1"), None);
    }

    #[test]
    fn test_int_prefix() {
        assert_eq!(parse_int_prefix("101"), Some(101));
        assert_eq!(parse_int_prefix(" 5 "), Some(5));
        assert_eq!(parse_int_prefix("5th"), Some(5));
        assert_eq!(parse_int_prefix("-3"), Some(-3));
        assert_eq!(parse_int_prefix("7.9"), Some(7));
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("99999999999999999999"), None);
    }

    #[test]
    fn test_number_to_int_truncates() {
        assert_eq!(number_to_int(5.0), Some(5));
        assert_eq!(number_to_int(5.9), Some(5));
        assert_eq!(number_to_int(-5.9), Some(-5));
        assert_eq!(number_to_int(f64::INFINITY), None);
        assert_eq!(number_to_int(f64::NAN), None);
    }
}
