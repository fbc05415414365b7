use chrono::{NaiveDate, TimeDelta};

/// `today` moved by `days`, or an error when the result leaves chrono's range.
fn shift_days(today: NaiveDate, days: i64, input: &str) -> eyre::Result<NaiveDate> {
    TimeDelta::try_days(days)
        .and_then(|delta| today.checked_add_signed(delta))
        .ok_or_else(|| eyre::eyre!("Invalid date '{input}': out of range"))
}

/// Parses a day typed by the user, relative days are resolved from `today`.
///
/// Accepts YYYY-MM-DD, `today`, `yesterday`, `tomorrow` and `Nd_ago`.
pub fn parse_day_string(day_str: &str, today: NaiveDate) -> eyre::Result<NaiveDate> {
    match day_str.trim() {
        "today" => Ok(today),
        "yesterday" => shift_days(today, -1, day_str),
        "tomorrow" => shift_days(today, 1, day_str),
        s if s.ends_with("d_ago") => {
            let days_ago_str = s.trim_end_matches("d_ago");
            let days_ago: i64 = days_ago_str
                .parse()
                .map_err(|e| eyre::eyre!("Invalid date '{s}': {e}"))?;
            let back = days_ago
                .checked_neg()
                .ok_or_else(|| eyre::eyre!("Invalid date '{s}': out of range"))?;
            shift_days(today, back, s)
        }
        s => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
            eyre::eyre!(
                "Invalid date '{}': {}. Use YYYY-MM-DD, today, yesterday, tomorrow or Nd_ago.",
                s,
                e
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn absolute_dates() -> eyre::Result<()> {
        let today = day(2024, 1, 15);
        assert_eq!(parse_day_string("2024-03-01", today)?, day(2024, 3, 1));
        assert_eq!(parse_day_string(" 2024-03-01 ", today)?, day(2024, 3, 1));
        Ok(())
    }

    #[test]
    fn relative_dates() -> eyre::Result<()> {
        let today = day(2024, 3, 1);
        assert_eq!(parse_day_string("today", today)?, today);
        assert_eq!(parse_day_string("yesterday", today)?, day(2024, 2, 29));
        assert_eq!(parse_day_string("tomorrow", today)?, day(2024, 3, 2));
        assert_eq!(parse_day_string("3d_ago", today)?, day(2024, 2, 27));
        Ok(())
    }

    #[test]
    fn rejects_garbage() {
        let today = day(2024, 1, 15);
        assert!(parse_day_string("next week", today).is_err());
        assert!(parse_day_string("xd_ago", today).is_err());
        assert!(parse_day_string("2024-02-30", today).is_err());
    }

    #[test]
    fn huge_offsets_are_errors() {
        let today = day(2024, 1, 15);
        for input in [
            "100000000d_ago",
            "9223372036854775807d_ago",
            "-9223372036854775808d_ago",
        ] {
            let err = parse_day_string(input, today).unwrap_err();
            assert!(err.to_string().contains("Invalid date"), "{input}: {err}");
        }
    }

    #[test]
    fn relative_days_at_the_edge_of_the_calendar() {
        assert!(parse_day_string("tomorrow", NaiveDate::MAX).is_err());
        assert!(parse_day_string("yesterday", NaiveDate::MIN).is_err());
    }
}
