use clap::Parser;
use hobby_config::DisplayConfig;
use hobby_core::DateFormatter;

use crate::utils::{
    command_error::{self, WithExitCode},
    exit_code::ExitCode,
};

mod commands;
mod presenter;
mod tracing;
mod utils;

#[derive(Parser, Debug)]
#[command(
    name = "hobby",
    version,
    long_about = Some("Keep a list of the hobby activities you have planned for this session.")
)]
struct Args {
    /// Path of the configuration file (default: <config dir>/hobby/config.toml)
    #[clap(long, global = true)]
    config: Option<String>,

    /// Locale used to display dates, e.g. en_US or fr_FR
    #[clap(long, global = true)]
    locale: Option<String>,

    /// How dates are displayed: short, medium, long or full
    #[clap(long, global = true)]
    date_style: Option<String>,

    /// Subcommand to execute (default: run)
    #[command(subcommand)]
    command: Option<commands::Command>,
}

impl Args {
    fn config_path(&self) -> eyre::Result<String> {
        if let Some(path) = &self.config {
            return Ok(path.clone());
        }
        let dirs = directories_next::ProjectDirs::from("", "", "hobby")
            .ok_or_else(|| eyre::eyre!("Could not determine the configuration directory"))?;
        Ok(dirs.config_dir().join("config.toml").to_string_lossy().into_owned())
    }

    /// Formatter from the config file with the command line flags on top.
    /// Any failure here is a configuration error.
    fn date_formatter(&self) -> command_error::Result<DateFormatter> {
        self.load_date_formatter().with_exit_code(ExitCode::ConfigError)
    }

    fn load_date_formatter(&self) -> eyre::Result<DateFormatter> {
        let config_path = self.config_path()?;
        let config = if self.config.is_some() {
            hobby_config::load(&config_path)?
        } else {
            hobby_config::load_or_default(&config_path)?
        };

        let display = config.display.merge(DisplayConfig {
            locale: self.locale.clone(),
            date_style: self.date_style.clone(),
        });
        Ok(DateFormatter::from_config(&display)?)
    }
}

fn run() -> command_error::Result<()> {
    color_eyre::install()?;
    tracing::setup()?;

    let args = Args::parse();
    let formatter = args.date_formatter()?;

    let command = args
        .command
        .unwrap_or(commands::Command::Run(commands::run::Command {}));
    command.execute(formatter)
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::Success,
        Err(error) => {
            eprintln!("Error: {:?}", error.report());
            error.code()
        }
    }
}
