//! Shift-plan input: splitting raw text into codes, normalizing aliases,
//! and reading the start date.

use chrono::NaiveDate;

use crate::error::{ShiftCalError, ShiftCalResult};

/// Code for a free / off-duty day.
pub const FREE_CODE: &str = "DF";

/// Alias accepted for [`FREE_CODE`] in input.
pub const FREE_ALIAS: &str = "Free";

/// Map input aliases onto their canonical code (`Free` -> `DF`).
///
/// Runs before both the exclusion check and the table lookup.
pub fn normalize_code(code: &str) -> &str {
    if code == FREE_ALIAS { FREE_CODE } else { code }
}

/// Whether `code` denotes a free day, before or after normalization.
pub fn is_free_code(code: &str) -> bool {
    normalize_code(code) == FREE_CODE
}

/// Split free-form text into shift codes: one per line, trimmed, blank lines
/// dropped. Only the first whitespace-separated token of a line counts, so
/// notes after the code are ignored.
pub fn parse_codes(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

/// Like [`parse_codes`], but an input without any code is an error.
pub fn parse_codes_non_empty(text: &str) -> ShiftCalResult<Vec<String>> {
    let codes = parse_codes(text);
    if codes.is_empty() {
        return Err(ShiftCalError::EmptyInput);
    }
    Ok(codes)
}

/// Parse a `YYYY-MM-DD` start date.
pub fn parse_start_date(value: &str) -> ShiftCalResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ShiftCalError::InvalidDateFormat(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_free_alias() {
        assert_eq!(normalize_code("Free"), "DF");
        assert_eq!(normalize_code("DF"), "DF");
        assert_eq!(normalize_code("SN"), "SN");
        // Aliasing is exact, not case-insensitive
        assert_eq!(normalize_code("free"), "free");
    }

    #[test]
    fn test_is_free_code() {
        assert!(is_free_code("DF"));
        assert!(is_free_code("Free"));
        assert!(!is_free_code("SN"));
        assert!(!is_free_code("df"));
    }

    #[test]
    fn test_parse_codes_trims_and_drops_blank_lines() {
        let text = "DF\n  SN  \n\n\t\nND2\r\nIMC   covering for Anna\n";
        assert_eq!(parse_codes(text), vec!["DF", "SN", "ND2", "IMC"]);
    }

    #[test]
    fn test_parse_codes_empty() {
        assert!(parse_codes("").is_empty());
        assert!(parse_codes("\n   \n").is_empty());
        assert!(matches!(
            parse_codes_non_empty(" \n"),
            Err(ShiftCalError::EmptyInput)
        ));
    }

    #[test]
    fn test_parse_start_date() {
        assert_eq!(
            parse_start_date("2024-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(
            parse_start_date(" 2024-02-29 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );

        for bad in ["01.01.2024", "2023-02-29", "2024/01/01", "tomorrow", ""] {
            assert!(
                matches!(parse_start_date(bad), Err(ShiftCalError::InvalidDateFormat(_))),
                "{bad} should be rejected"
            );
        }
    }
}
