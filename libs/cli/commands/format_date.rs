use std::io::{self, Write};

use chrono::{Local, NaiveDate};
use clap::Args;
use hobby_core::DateFormatter;

use crate::utils::{
    command_error::{self, WithExitCode},
    exit_code::ExitCode,
    time::parse_day_string,
};

#[derive(Args, Debug)]
pub struct Command {
    /// Date to format (YYYY-MM-DD, today, yesterday, tomorrow or Nd_ago)
    date: String,
}

pub fn handle(command: Command, formatter: DateFormatter) -> command_error::Result<()> {
    let today = Local::now().date_naive();
    write_formatted(&command, &formatter, today, &mut io::stdout().lock())
}

/// Writes `command.date` as the activity list would display it.
fn write_formatted(
    command: &Command,
    formatter: &DateFormatter,
    today: NaiveDate,
    out: &mut impl Write,
) -> command_error::Result<()> {
    let date = parse_day_string(&command.date, today).with_exit_code(ExitCode::DataError)?;

    writeln!(out, "{}", formatter.format(date)).with_exit_code(ExitCode::IoError)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hobby_core::DateStyle;

    fn format(date: &str, formatter: &DateFormatter) -> command_error::Result<String> {
        let command = Command { date: date.into() };
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let mut out = Vec::new();
        write_formatted(&command, formatter, today, &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn prints_the_long_date() {
        let text = format("2024-01-15", &DateFormatter::default()).ok();
        assert_eq!(text.as_deref(), Some("January 15, 2024\n"));
    }

    #[test]
    fn relative_days_use_today() -> eyre::Result<()> {
        let formatter = DateFormatter::new("en_US", DateStyle::Full)?;
        let text = format("yesterday", &formatter).ok();
        assert_eq!(text.as_deref(), Some("Sunday, January 14, 2024\n"));
        Ok(())
    }

    #[test]
    fn unparsable_dates_exit_with_data_error() {
        for input in ["someday", "100000000d_ago"] {
            let error = format(input, &DateFormatter::default())
                .err()
                .expect("should fail");
            assert_eq!(error.code(), ExitCode::DataError);
            assert!(error.report().to_string().contains("Invalid date"));
        }
    }
}
