//! Shift definitions and the shift-code lookup table.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{ShiftCalError, ShiftCalResult};
use crate::sequence::normalize_code;

/// A time of day as written in a shift definition: zero-padded 24-hour `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShiftTime(NaiveTime);

impl ShiftTime {
    /// Parse `HH:MM`. Unpadded forms like `8:00` are rejected.
    pub fn parse(value: &str) -> Option<Self> {
        let bytes = value.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return None;
        }
        if ![bytes[0], bytes[1], bytes[3], bytes[4]].iter().all(u8::is_ascii_digit) {
            return None;
        }
        NaiveTime::parse_from_str(value, "%H:%M").ok().map(ShiftTime)
    }

    pub fn as_naive(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for ShiftTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// What a shift code means: a description plus either "all day" or a time span.
///
/// Times stay as the strings the user wrote; they are checked when the
/// definition is used (see [`ShiftDefinition::time_span`]) so that errors can
/// name the offending shift code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftDefinition {
    pub description: String,

    #[serde(default = "default_all_day")]
    pub all_day: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    /// The end time falls on the day after the start (overnight shift)
    #[serde(
        default,
        rename = "next_day",
        alias = "ends_next_day",
        skip_serializing_if = "is_false"
    )]
    pub ends_next_day: bool,
}

fn default_all_day() -> bool {
    true
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl ShiftDefinition {
    pub fn all_day(description: impl Into<String>) -> Self {
        ShiftDefinition {
            description: description.into(),
            all_day: true,
            start_time: None,
            end_time: None,
            ends_next_day: false,
        }
    }

    pub fn timed(description: impl Into<String>, start: &str, end: &str) -> Self {
        ShiftDefinition {
            description: description.into(),
            all_day: false,
            start_time: Some(start.to_string()),
            end_time: Some(end.to_string()),
            ends_next_day: false,
        }
    }

    /// Mark this definition as ending on the following day.
    pub fn overnight(mut self) -> Self {
        self.ends_next_day = true;
        self
    }

    /// Definition used for codes missing from the table: an all-day event
    /// described by the code itself.
    pub fn fallback(code: &str) -> Self {
        Self::all_day(code)
    }

    /// Parsed start and end time of a timed shift.
    ///
    /// Fails with `MissingTimeField` or `MalformedTimeField` naming `code`.
    pub fn time_span(&self, code: &str) -> ShiftCalResult<(ShiftTime, ShiftTime)> {
        let start = parse_time_field(code, "start_time", self.start_time.as_deref())?;
        let end = parse_time_field(code, "end_time", self.end_time.as_deref())?;
        Ok((start, end))
    }

    /// Check that a timed definition carries usable times. All-day
    /// definitions always pass; their times are ignored.
    pub fn validate(&self, code: &str) -> ShiftCalResult<()> {
        if self.all_day {
            return Ok(());
        }
        self.time_span(code).map(|_| ())
    }
}

fn parse_time_field(code: &str, field: &'static str, value: Option<&str>) -> ShiftCalResult<ShiftTime> {
    let value = value.ok_or_else(|| ShiftCalError::MissingTimeField {
        code: code.to_string(),
        field,
    })?;

    ShiftTime::parse(value).ok_or_else(|| ShiftCalError::MalformedTimeField {
        code: code.to_string(),
        field,
        value: value.to_string(),
    })
}

/// Shift code -> definition lookup, passed explicitly into every translation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftTable {
    shifts: BTreeMap<String, ShiftDefinition>,
}

impl ShiftTable {
    /// An empty table. Every code resolves to its fallback definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in shift definitions.
    pub fn defaults() -> Self {
        [
            ("DF", ShiftDefinition::all_day("Dienstfrei")),
            ("IMC", ShiftDefinition::timed("Station", "08:00", "16:54")),
            ("SN", ShiftDefinition::timed("Spätnacht", "15:30", "08:45").overnight()),
            ("ND2", ShiftDefinition::timed("Nachtdienst", "20:00", "08:45").overnight()),
            ("TD2", ShiftDefinition::timed("Tagdienst Wochenende", "08:00", "20:45")),
            ("SH", ShiftDefinition::all_day("Stoffwechsel SH")),
            ("WS", ShiftDefinition::timed("Wochenstation", "10:30", "15:30")),
            ("Poli", ShiftDefinition::timed("Wochenstation", "10:30", "15:30")),
        ]
        .into_iter()
        .map(|(code, def)| (code.to_string(), def))
        .collect()
    }

    pub fn insert(&mut self, code: impl Into<String>, definition: ShiftDefinition) -> Option<ShiftDefinition> {
        self.shifts.insert(code.into(), definition)
    }

    pub fn get(&self, code: &str) -> Option<&ShiftDefinition> {
        self.shifts.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.shifts.contains_key(code)
    }

    /// Look up `code`, falling back to a generic all-day definition.
    pub fn resolve(&self, code: &str) -> Cow<'_, ShiftDefinition> {
        match self.shifts.get(code) {
            Some(def) => Cow::Borrowed(def),
            None => Cow::Owned(ShiftDefinition::fallback(code)),
        }
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ShiftDefinition)> {
        self.shifts.iter().map(|(code, def)| (code.as_str(), def))
    }

    /// Check every definition up front, failing on the first unusable one.
    pub fn validate(&self) -> ShiftCalResult<()> {
        self.iter().try_for_each(|(code, def)| def.validate(code))
    }

    /// Distinct normalized codes that have no entry in this table,
    /// in order of first appearance.
    pub fn unknown_codes<'a, S: AsRef<str>>(&self, codes: &'a [S]) -> Vec<&'a str> {
        let mut unknown: Vec<&'a str> = Vec::new();
        for code in codes {
            let code = normalize_code(code.as_ref());
            if !self.contains(code) && !unknown.contains(&code) {
                unknown.push(code);
            }
        }
        unknown
    }
}

impl FromIterator<(String, ShiftDefinition)> for ShiftTable {
    fn from_iter<I: IntoIterator<Item = (String, ShiftDefinition)>>(iter: I) -> Self {
        ShiftTable {
            shifts: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, ShiftDefinition)> for ShiftTable {
    fn extend<I: IntoIterator<Item = (String, ShiftDefinition)>>(&mut self, iter: I) {
        self.shifts.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_time_requires_zero_padding() {
        assert_eq!(ShiftTime::parse("08:45").unwrap().to_string(), "08:45");
        assert_eq!(ShiftTime::parse("23:59").unwrap().to_string(), "23:59");
        assert!(ShiftTime::parse("8:45").is_none());
        assert!(ShiftTime::parse("24:00").is_none());
        assert!(ShiftTime::parse("08:60").is_none());
        assert!(ShiftTime::parse("0845").is_none());
        assert!(ShiftTime::parse("").is_none());
        // chrono skips leading whitespace in numeric fields
        assert!(ShiftTime::parse(" 8:00").is_none());
        assert!(ShiftTime::parse("08: 5").is_none());
        assert!(ShiftTime::parse("+8:00").is_none());
    }

    #[test]
    fn test_defaults_are_valid() {
        let table = ShiftTable::defaults();
        assert_eq!(table.len(), 8);
        table.validate().unwrap();

        let sn = table.get("SN").unwrap();
        assert!(!sn.all_day);
        assert!(sn.ends_next_day);
        assert_eq!(sn.start_time.as_deref(), Some("15:30"));
        assert_eq!(sn.end_time.as_deref(), Some("08:45"));

        assert!(table.get("DF").unwrap().all_day);
        assert!(!table.contains("Free"), "Free is an alias, not a table entry");
    }

    #[test]
    fn test_resolve_unknown_code_falls_back_to_all_day() {
        let table = ShiftTable::defaults();
        let def = table.resolve("XYZ");
        assert_eq!(def.description, "XYZ");
        assert!(def.all_day);
        assert!(matches!(def, Cow::Owned(_)));
        assert!(matches!(table.resolve("SN"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_validate_reports_missing_time_with_code() {
        let mut table = ShiftTable::new();
        table.insert(
            "LATE",
            ShiftDefinition {
                description: "Late".to_string(),
                all_day: false,
                start_time: Some("14:00".to_string()),
                end_time: None,
                ends_next_day: false,
            },
        );

        let err = table.validate().unwrap_err();
        match err {
            ShiftCalError::MissingTimeField { code, field } => {
                assert_eq!(code, "LATE");
                assert_eq!(field, "end_time");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_reports_malformed_time() {
        let mut table = ShiftTable::new();
        table.insert("EARLY", ShiftDefinition::timed("Early", "6:00", "14:00"));

        let err = table.validate().unwrap_err();
        assert!(
            matches!(&err, ShiftCalError::MalformedTimeField { code, field: "start_time", value } if code == "EARLY" && value == "6:00"),
            "got {err:?}"
        );
        assert!(err.to_string().contains("EARLY"));
    }

    #[test]
    fn test_validate_rejects_space_padded_time() {
        let mut table = ShiftTable::new();
        table.insert("LATE", ShiftDefinition::timed("Late", " 8:00", "16:00"));

        let err = table.validate().unwrap_err();
        assert!(
            matches!(&err, ShiftCalError::MalformedTimeField { code, field: "start_time", value } if code == "LATE" && value == " 8:00"),
            "got {err:?}"
        );
    }

    #[test]
    fn test_all_day_definition_ignores_bad_times() {
        let mut def = ShiftDefinition::all_day("Off");
        def.start_time = Some("garbage".to_string());
        def.validate("OFF").unwrap();
    }

    #[test]
    fn test_unknown_codes_are_distinct_and_normalized() {
        let table = ShiftTable::defaults();
        let codes = ["SN", "XYZ", "Free", "ABC", "XYZ", "DF"];
        assert_eq!(table.unknown_codes(&codes), vec!["XYZ", "ABC"]);
    }

    #[test]
    fn test_extend_overrides_existing_entries() {
        let mut table = ShiftTable::defaults();
        table.extend([(
            "SN".to_string(),
            ShiftDefinition::timed("Spätdienst", "14:00", "22:00"),
        )]);
        let sn = table.get("SN").unwrap();
        assert_eq!(sn.description, "Spätdienst");
        assert!(!sn.ends_next_day);
        assert_eq!(table.len(), 8);
    }
}
