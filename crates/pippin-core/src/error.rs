use thiserror::Error;

/// Top-level error type for the Pippin application.
///
/// Response selection itself cannot fail: it returns a reply for any input
/// string. Errors only arise at the boundary, when reading configuration or
/// writing to the terminal.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PippinError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for PippinError {
    fn from(err: toml::de::Error) -> Self {
        PippinError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for PippinError {
    fn from(err: toml::ser::Error) -> Self {
        PippinError::Config(err.to_string())
    }
}

/// A specialized `Result` type for Pippin operations.
pub type Result<T> = std::result::Result<T, PippinError>;
