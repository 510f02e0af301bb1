//! Post date parsing.
//!
//! Front-matter dates are parsed against the configurable strftime-style
//! time format (default `"%B %d, %Y"`). Date-only formats get a midnight
//! time so posts always carry a full timestamp for sorting and feeds.

use chrono::{NaiveDate, NaiveDateTime};

/// Parse a date string against `format`, accepting both datetime and
/// date-only formats. Returns None when the value does not match.
pub fn parse_date(value: &str, format: &str) -> Option<NaiveDateTime> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
        return Some(datetime);
    }
    NaiveDate::parse_from_str(value, format)
        .ok()
        .map(|d| d.and_hms_opt(0, 0, 0).unwrap_or_default())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_default_format() {
        let dt = parse_date("January 15, 2024", "%B %d, %Y").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 1, 15));
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_parse_datetime_format() {
        let dt = parse_date("2024-01-15 14:30", "%Y-%m-%d %H:%M").unwrap();
        assert_eq!(dt.hour(), 14);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_parse_mismatched_format_is_none() {
        assert!(parse_date("2024-01-15", "%B %d, %Y").is_none());
        assert!(parse_date("not a date", "%B %d, %Y").is_none());
    }

    #[test]
    fn test_parse_invalid_day_is_none() {
        assert!(parse_date("February 30, 2024", "%B %d, %Y").is_none());
    }
}
