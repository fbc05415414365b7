use colored::*;
use std::fmt::Display;
use std::io::{self, Write};

/// Defines the type of message to determine the icon and color scheme.
pub enum LogType {
    /// Screen titles.
    Title,
    /// One recorded activity.
    Entry,
    Success,
    Info,
}

/// A builder for creating structured, tree-like messages.
pub struct LogBuilder<'a> {
    log_type: LogType,
    message: String,
    details: Vec<(&'a str, Box<dyn Display + 'a>)>,
}

impl<'a> LogBuilder<'a> {
    pub fn new(log_type: LogType, message: impl Display) -> Self {
        Self {
            log_type,
            message: message.to_string(),
            details: Vec::new(),
        }
    }

    /// Adds a new detail line (a "branch") below the message.
    pub fn with_branch(mut self, label: &'a str, value: impl Display + 'a) -> Self {
        self.details.push((label, Box::new(value)));
        self
    }

    /// Consumes the builder and writes the formatted message to `out`.
    pub fn write_to(self, out: &mut impl Write) -> io::Result<()> {
        let (symbol, color) = match self.log_type {
            LogType::Title => ("❯", "blue"),
            LogType::Entry => ("•", "cyan"),
            LogType::Success => ("✔", "green"),
            LogType::Info => ("ℹ", "yellow"),
        };

        writeln!(
            out,
            "\n{} {}",
            symbol.color(color).bold(),
            self.message.color(color).bold()
        )?;

        let count = self.details.len();
        for (i, (label, value)) in self.details.iter().enumerate() {
            let prefix = if i == count - 1 { "  ╰─" } else { "  ├─" };
            let padded_label = format!("{label}:");
            writeln!(out, "{} {:<6} {}", prefix.dimmed(), padded_label.bold(), value)?;
        }
        Ok(())
    }
}
