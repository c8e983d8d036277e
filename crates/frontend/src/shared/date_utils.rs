/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Utc};

const MISSING: &str = "-";

/// Format a timestamp to DD.MM.YYYY HH:MM
/// Example: 2024-03-15T14:02:26.123Z -> "15.03.2024 14:02"
pub fn format_datetime(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

/// Format a timestamp to DD.MM.YYYY
pub fn format_date(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime(Some(&ts("2024-03-15T14:02:26.123Z"))),
            "15.03.2024 14:02"
        );
        assert_eq!(
            format_datetime(Some(&ts("2024-12-31T23:59:59Z"))),
            "31.12.2024 23:59"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some(&ts("2024-03-15T14:02:26.123Z"))), "15.03.2024");
    }

    #[test]
    fn test_missing() {
        assert_eq!(format_datetime(None), "-");
        assert_eq!(format_date(None), "-");
    }
}
