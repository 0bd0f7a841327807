#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("invalid duration \"{0}\"")]
    InvalidDuration(String),

    #[error("unrecognized log level: {0}")]
    InvalidLogLevel(String),

    #[error("{0}")]
    Validation(String),
}
