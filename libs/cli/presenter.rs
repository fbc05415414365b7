use std::io::{self, Write};

use hobby_core::{Activity, DateFormatter, Presenter};

use crate::utils::display::{LogBuilder, LogType};

pub const LIST_TITLE: &str = "Hobby Activities";
pub const FORM_TITLE: &str = "Add New Activity";

/// Draws the list screen and the form header on a terminal.
///
/// `Presenter` calls cannot fail, so the first write error is kept until the
/// session asks for it with [`TerminalPresenter::take_error`].
pub struct TerminalPresenter<W: Write> {
    out: W,
    formatter: DateFormatter,
    error: Option<io::Error>,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, formatter: DateFormatter) -> Self {
        Self {
            out,
            formatter,
            error: None,
        }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_out(self) -> W {
        self.out
    }

    pub fn formatter(&self) -> &DateFormatter {
        &self.formatter
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn keep_error(&mut self, result: io::Result<()>) {
        if let Err(error) = result {
            self.error.get_or_insert(error);
        }
    }

    fn write_list(&mut self, activities: &[Activity]) -> io::Result<()> {
        LogBuilder::new(
            LogType::Title,
            format!("{LIST_TITLE} ({})", activities.len()),
        )
        .write_to(&mut self.out)?;

        if activities.is_empty() {
            LogBuilder::new(LogType::Info, "Nothing planned yet, type 'add' to record an activity")
                .write_to(&mut self.out)?;
        }

        for activity in activities {
            LogBuilder::new(LogType::Entry, activity.hobby_name())
                .with_branch("Venue", activity.venue())
                .with_branch("Date", self.formatter.format(activity.date()))
                .with_branch("Time", activity.time())
                .write_to(&mut self.out)?;
        }
        self.out.flush()
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn render(&mut self, activities: &[Activity]) {
        let result = self.write_list(activities);
        self.keep_error(result);
    }

    fn present_modal(&mut self) {
        let result = LogBuilder::new(LogType::Title, FORM_TITLE).write_to(&mut self.out);
        self.keep_error(result);
    }

    fn dismiss_modal(&mut self) {
        let result = self.out.flush();
        self.keep_error(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use hobby_core::ActivityInput;

    #[test]
    fn rows_show_every_field() {
        colored::control::set_override(false);
        let mut presenter = TerminalPresenter::new(Vec::new(), DateFormatter::default());
        let activity = Activity::create(ActivityInput {
            hobby_name: "Chess".into(),
            venue: "Library".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            time: "6:00 PM".into(),
        });

        presenter.render(&[activity]);

        let text = String::from_utf8(presenter.into_out()).unwrap();
        assert!(text.contains("Hobby Activities (1)"));
        assert!(text.contains("• Chess"));
        assert!(text.contains("Venue: Library"));
        assert!(text.contains("Date:  March 1, 2024"));
        assert!(text.contains("Time:  6:00 PM"));
    }

    #[test]
    fn empty_list_has_a_hint() {
        colored::control::set_override(false);
        let mut presenter = TerminalPresenter::new(Vec::new(), DateFormatter::default());

        presenter.render(&[]);

        let text = String::from_utf8(presenter.into_out()).unwrap();
        assert!(text.contains("Hobby Activities (0)"));
        assert!(text.contains("Nothing planned yet"));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_are_kept_for_the_caller() {
        let mut presenter = TerminalPresenter::new(BrokenPipe, DateFormatter::default());

        presenter.render(&[]);
        presenter.present_modal();

        let error = presenter.take_error().expect("write should have failed");
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
        assert!(presenter.take_error().is_none());
    }
}
