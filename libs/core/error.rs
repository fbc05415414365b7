use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown locale '{0}', expected a name such as en_US or fr_FR")]
    UnknownLocale(String),

    #[error("Unknown date style '{0}', expected one of: short, medium, long, full")]
    UnknownDateStyle(String),
}

pub type Result<T> = std::result::Result<T, Error>;
