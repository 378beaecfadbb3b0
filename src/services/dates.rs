use std::ops::RangeInclusive;

use chrono::NaiveDate;
use serde_json::Value;

use crate::models::Stay;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StayRejection {
    #[error("invalid date")]
    InvalidDate { value: String },
    #[error("invalid date")]
    MissingDate { field: &'static str },
}

/// A stay whose dates parsed, borrowing the caller's record.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedStay<'a> {
    pub stay: &'a Stay,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub start_text: &'a str,
    pub end_text: &'a str,
}

impl<'a> ParsedStay<'a> {
    pub fn period(&self) -> RangeInclusive<NaiveDate> {
        self.start..=self.end
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, StayRejection> {
    let invalid = || StayRejection::InvalidDate {
        value: value.to_string(),
    };
    if !has_iso_shape(value) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

// Exactly `YYYY-MM-DD`: chrono alone tolerates padding, signs and short fields.
fn has_iso_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn date_text<'a>(
    value: Option<&'a Value>,
    field: &'static str,
) -> Result<&'a str, StayRejection> {
    match value {
        None => Err(StayRejection::MissingDate { field }),
        Some(v) => v.as_str().ok_or_else(|| StayRejection::InvalidDate {
            value: v.to_string(),
        }),
    }
}

pub fn parse_stay(stay: &Stay) -> Result<ParsedStay<'_>, StayRejection> {
    let start_text = date_text(stay.start_date.as_ref(), "start_date")?;
    let end_text = date_text(stay.end_date.as_ref(), "end_date")?;

    Ok(ParsedStay {
        stay,
        start: parse_date(start_text)?,
        end: parse_date(end_text)?,
        start_text,
        end_text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_parse_valid_stay() {
        let stay = Stay::new(1, 1, "2016-10-10", "2016-10-15");
        let parsed = parse_stay(&stay).unwrap();
        assert_eq!(parsed.start, date("2016-10-10"));
        assert_eq!(parsed.end, date("2016-10-15"));
        assert_eq!(parsed.end_text, "2016-10-15");
        assert!(parsed.period().contains(&date("2016-10-12")));
        assert!(!parsed.period().contains(&date("2016-10-16")));
    }

    #[test]
    fn test_parse_invalid_start() {
        let stay = Stay::new(1, 1, "hello", "2016-10-15");
        let err = parse_stay(&stay).unwrap_err();
        assert_eq!(
            err,
            StayRejection::InvalidDate {
                value: "hello".to_string()
            }
        );
        assert_eq!(err.to_string(), "invalid date");
    }

    #[test]
    fn test_parse_invalid_end() {
        let stay = Stay::new(1, 1, "2016-10-10", "2016-13-01");
        assert!(matches!(
            parse_stay(&stay),
            Err(StayRejection::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_parse_missing_date() {
        let stay = Stay {
            end_date: None,
            ..Stay::new(1, 1, "2016-10-10", "")
        };
        let err = parse_stay(&stay).unwrap_err();
        assert_eq!(err, StayRejection::MissingDate { field: "end_date" });
        assert_eq!(err.to_string(), "invalid date");
    }

    #[test]
    fn test_parse_date_requires_exact_shape() {
        for value in ["2016-1-5", " 2016-10-10", "+2016-10-10", "2016-10-10 ", "2016/10/10", "20161010"] {
            assert!(parse_date(value).is_err(), "{value:?} should be rejected");
        }
        assert_eq!(parse_date("2016-01-05").unwrap(), date("2016-01-05"));
    }

    #[test]
    fn test_parse_non_string_date() {
        let stay = Stay {
            start_date: Some(serde_json::json!(20161016)),
            ..Stay::new(1, 1, "", "2016-10-15")
        };
        let err = parse_stay(&stay).unwrap_err();
        assert_eq!(
            err,
            StayRejection::InvalidDate {
                value: "20161016".to_string()
            }
        );
        assert_eq!(err.to_string(), "invalid date");
    }

    #[test]
    fn test_reversed_dates_still_parse() {
        let stay = Stay::new(1, 1, "2016-10-15", "2016-10-10");
        let parsed = parse_stay(&stay).unwrap();
        assert!(parsed.period().is_empty());
    }
}
