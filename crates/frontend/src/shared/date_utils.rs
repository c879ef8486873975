/// Utilities for date and time formatting
///
/// The wire carries ISO-8601 strings; everything here is display-only.
use chrono::{DateTime, NaiveDate, Utc};

/// Calendar day of an ISO timestamp or date, if parsable.
pub fn day_of(value: &str) -> Option<NaiveDate> {
    parse_day(value)
}

fn parse_day(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// "2024-03-15T14:02:26Z" -> "Mar 15, 2024"
pub fn format_date(value: &str) -> String {
    parse_day(value)
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// "2024-03-15T14:02:26Z" -> "Mar 15, 2024 14:02"
pub fn format_datetime(value: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format("%b %-d, %Y %H:%M").to_string();
    }
    format_date(value)
}

/// Value for an `<input type="date">`, empty when unparsable.
pub fn for_date_input(value: &str) -> String {
    parse_day(value)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Value for an `<input type="datetime-local">`, empty when unparsable.
pub fn for_datetime_input(value: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format("%Y-%m-%dT%H:%M").to_string();
    }
    parse_day(value)
        .map(|d| d.format("%Y-%m-%dT00:00").to_string())
        .unwrap_or_default()
}

/// `<input type="datetime-local">` value ("2024-03-15T14:30") to the ISO
/// form sent on the wire.
pub fn datetime_input_to_iso(value: &str) -> String {
    if value.len() == 16 && value.as_bytes().get(10) == Some(&b'T') {
        format!("{}:00.000Z", value)
    } else {
        value.to_string()
    }
}

fn is_before_day(value: &str, day: NaiveDate) -> bool {
    parse_day(value).map(|d| d < day).unwrap_or(false)
}

/// Whether the date lies strictly before today (deadline highlighting).
pub fn is_past(value: &str) -> bool {
    is_before_day(value, Utc::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "Mar 15, 2024");
        assert_eq!(format_date("2024-12-05"), "Dec 5, 2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26+00:00"),
            "Mar 15, 2024 14:02"
        );
        // Date-only values fall back to the date format.
        assert_eq!(format_datetime("2024-03-15"), "Mar 15, 2024");
    }

    #[test]
    fn test_for_date_input() {
        assert_eq!(for_date_input("2024-03-15T14:02:26Z"), "2024-03-15");
        assert_eq!(for_date_input("not a date"), "");
    }

    #[test]
    fn test_is_before_day() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert!(is_before_day("2024-03-14", day));
        assert!(!is_before_day("2024-03-15", day));
        assert!(!is_before_day("2024-03-16", day));
        assert!(!is_before_day("invalid", day));
    }

    #[test]
    fn test_datetime_input_round_trip() {
        assert_eq!(
            for_datetime_input("2024-03-15T14:30:00.000Z"),
            "2024-03-15T14:30"
        );
        assert_eq!(
            datetime_input_to_iso("2024-03-15T14:30"),
            "2024-03-15T14:30:00.000Z"
        );
        // Already-ISO values pass through untouched.
        assert_eq!(
            datetime_input_to_iso("2024-03-15T14:30:00.000Z"),
            "2024-03-15T14:30:00.000Z"
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_datetime("invalid"), "invalid");
    }
}
