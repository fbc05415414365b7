use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use clap::Args;
use colored::Colorize;
use hobby_core::{ActivityForm, Clock, DateFormatter, ListScreen, SystemClock};
use tracing::debug;

use crate::{
    presenter::TerminalPresenter,
    utils::{
        command_error::{self, WithExitCode},
        display::{LogBuilder, LogType},
        exit_code::ExitCode,
        time::parse_day_string,
    },
};

#[derive(Args, Debug)]
pub struct Command {}

pub fn handle(_: Command, formatter: DateFormatter) -> command_error::Result<()> {
    let mut session = Session::new(io::stdin().lock(), io::stdout(), formatter, SystemClock);
    session.run().with_exit_code(ExitCode::IoError)?;
    Ok(())
}

/// Interactive loop over the list screen: reads commands and form answers
/// line by line from `input`, draws everything on `output`.
pub struct Session<R: BufRead, W: Write> {
    input: R,
    screen: ListScreen<TerminalPresenter<W>>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, formatter: DateFormatter, clock: impl Clock + 'static) -> Self {
        let presenter = TerminalPresenter::new(output, formatter);
        Self {
            input,
            screen: ListScreen::new(presenter, clock),
        }
    }

    #[cfg(test)]
    pub fn screen(&self) -> &ListScreen<TerminalPresenter<W>> {
        &self.screen
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.screen.into_presenter().into_out()
    }

    /// Runs until `quit` or the end of the input.
    pub fn run(&mut self) -> eyre::Result<()> {
        self.check_output()?;

        loop {
            let Some(line) = self.prompt(&"❯".bold().to_string())? else {
                break;
            };

            match line.trim() {
                "a" | "add" => self.add_activity()?,
                "l" | "list" => self.screen.render(),
                "q" | "quit" => break,
                "" => {}
                other => LogBuilder::new(
                    LogType::Info,
                    format!("Unknown command '{other}', use add, list or quit"),
                )
                .write_to(self.out())?,
            }
            self.check_output()?;
        }

        Ok(())
    }

    fn add_activity(&mut self) -> eyre::Result<()> {
        let today = self.screen.open_form().date();
        self.check_output()?;

        writeln!(self.out(), "{}", "Hobby Information".underline())?;
        if !self.ask_text("Hobby Name", |form, value| form.set_hobby_name(value))? {
            return self.discard();
        }
        if !self.ask_text("Venue", |form, value| form.set_venue(value))? {
            return self.discard();
        }

        writeln!(self.out(), "{}", "Date and Time".underline())?;
        if !self.ask_date(today)? {
            return self.discard();
        }
        if !self.ask_text("Time (e.g., 3:00 PM)", |form, value| form.set_time(value))? {
            return self.discard();
        }

        let Some(answer) = self.prompt("Add Activity? [Y/n]")? else {
            return self.discard();
        };
        if matches!(answer.trim().to_lowercase().as_str(), "n" | "no") {
            return self.discard();
        }

        if let Some(activity) = self.screen.submit() {
            debug!(id = activity.id(), "activity recorded");
            LogBuilder::new(LogType::Success, "Activity added")
                .with_branch("Id", activity.id().to_owned())
                .write_to(self.out())?;
        }
        Ok(())
    }

    /// Asks for one text field, the answer is stored untouched.
    /// Returns false when the input ended.
    fn ask_text(&mut self, label: &str, set: fn(&mut ActivityForm, String)) -> eyre::Result<bool> {
        let Some(answer) = self.prompt(label)? else {
            return Ok(false);
        };
        if let Some(form) = self.screen.form_mut() {
            set(form, answer);
        }
        Ok(true)
    }

    fn ask_date(&mut self, today: NaiveDate) -> eyre::Result<bool> {
        let default = self.screen.presenter().formatter().format(today);
        loop {
            let Some(answer) = self.prompt(&format!("Select Date [{default}]"))? else {
                return Ok(false);
            };
            if answer.trim().is_empty() {
                return Ok(true);
            }

            match parse_day_string(&answer, today) {
                Ok(date) => {
                    if let Some(form) = self.screen.form_mut() {
                        form.set_date(date);
                    }
                    return Ok(true);
                }
                Err(error) => writeln!(self.out(), "{}", error.to_string().red())?,
            }
        }
    }

    fn discard(&mut self) -> eyre::Result<()> {
        if self.screen.cancel() {
            LogBuilder::new(LogType::Info, "Discarded").write_to(self.out())?;
        }
        self.check_output()
    }

    /// Writes `label`, then reads one line without its line ending.
    /// `None` means the input is exhausted.
    fn prompt(&mut self, label: &str) -> eyre::Result<Option<String>> {
        let out = self.out();
        write!(out, "{label} ")?;
        out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out())?;
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn out(&mut self) -> &mut W {
        self.screen.presenter_mut().out()
    }

    fn check_output(&mut self) -> eyre::Result<()> {
        match self.screen.presenter_mut().take_error() {
            Some(error) => Err(error.into()),
            None => Ok(()),
        }
    }
}
