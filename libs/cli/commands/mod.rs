use clap::Subcommand;
use hobby_core::DateFormatter;

use crate::utils::command_error;

pub mod format_date;
pub mod run;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the activity list and record activities interactively
    Run(run::Command),
    /// Print a date the way the activity list displays it
    FormatDate(format_date::Command),
}

impl Command {
    pub fn execute(self, formatter: DateFormatter) -> command_error::Result<()> {
        match self {
            Self::Run(o) => run::handle(o, formatter)?,
            Self::FormatDate(o) => format_date::handle(o, formatter)?,
        };

        Ok(())
    }
}
