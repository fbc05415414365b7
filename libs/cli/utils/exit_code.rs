use std::process::Termination;

/// Exit codes of the `hobby` binary, values follow `<sysexits.h>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// The program executed successfully. (EX_OK)
    Success = 0,

    /// A generic or unspecified error occurred.
    Error = 1,

    /// The input data was incorrect in some way, e.g. a date that cannot be
    /// parsed. (EX_DATAERR)
    DataError = 65,

    /// Reading from or writing to the terminal failed. (EX_IOERR)
    IoError = 74,

    /// The configuration file or a display option is invalid. (EX_CONFIG)
    ConfigError = 78,
}

impl ExitCode {
    /// Returns the integer value of the exit code.
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Allows `ExitCode` to be returned from `main`.
impl Termination for ExitCode {
    fn report(self) -> std::process::ExitCode {
        self.code().into()
    }
}
