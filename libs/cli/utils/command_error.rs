use crate::utils::exit_code::ExitCode;

/// Error returned by a command, carrying the exit code the process ends with.
pub struct Error {
    code: ExitCode,
    report: eyre::Report,
}

impl Error {
    pub fn code(&self) -> ExitCode {
        self.code
    }

    pub fn report(&self) -> &eyre::Report {
        &self.report
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl<E> From<E> for Error
where
    E: Into<eyre::Report>,
{
    #[track_caller]
    fn from(error: E) -> Self {
        Self {
            code: ExitCode::Error,
            report: error.into(),
        }
    }
}

pub trait WithExitCode<T> {
    /// Fails with `code` instead of the generic error code.
    fn with_exit_code(self, code: ExitCode) -> Result<T>;
}

impl<T, E> WithExitCode<T> for std::result::Result<T, E>
where
    E: Into<eyre::Report>,
{
    fn with_exit_code(self, code: ExitCode) -> Result<T> {
        self.map_err(|error| Error {
            code,
            report: error.into(),
        })
    }
}
