// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::{Zoned, civil::Date};
use meetslot_core::ScheduleError;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Today in the system time zone.
pub fn today() -> Date {
    Zoned::now().date()
}

/// Parses a date given on the command line: `today`, `tomorrow`, `yesterday`
/// or `YYYY-MM-DD`.
pub fn parse_date(today: Date, s: &str) -> Result<Date, ScheduleError> {
    let invalid = || ScheduleError::ParseDate(s.trim().to_string());
    match s.trim().to_ascii_lowercase().as_str() {
        "today" => Ok(today),
        "tomorrow" => today.tomorrow().map_err(|_| invalid()),
        "yesterday" => today.yesterday().map_err(|_| invalid()),
        other => other.parse().map_err(|_| invalid()),
    }
}

/// Formats a length of time in minutes as `1h 30m`.
pub fn format_minutes(minutes: u16) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_parse_date_keywords() {
        let today = date(2024, 2, 28);
        assert_eq!(parse_date(today, "today").unwrap(), today);
        assert_eq!(parse_date(today, "Tomorrow").unwrap(), date(2024, 2, 29));
        assert_eq!(parse_date(today, "yesterday").unwrap(), date(2024, 2, 27));
    }

    #[test]
    fn test_parse_date_tomorrow_crosses_year() {
        let today = date(2024, 12, 31);
        assert_eq!(parse_date(today, "tomorrow").unwrap(), date(2025, 1, 1));
    }

    #[test]
    fn test_parse_date_iso() {
        let today = date(2024, 1, 1);
        assert_eq!(parse_date(today, "2023-12-25").unwrap(), date(2023, 12, 25));
        assert_eq!(parse_date(today, " 2023-12-25 ").unwrap(), date(2023, 12, 25));
    }

    #[test]
    fn test_parse_date_invalid() {
        let today = date(2024, 1, 1);
        assert_eq!(
            parse_date(today, "next week"),
            Err(ScheduleError::ParseDate("next week".to_string()))
        );
        assert!(parse_date(today, "2023-02-30").is_err());
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(120), "2h");
        assert_eq!(format_minutes(90), "1h 30m");
    }
}
