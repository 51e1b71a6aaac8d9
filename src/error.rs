use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SERVER_PORT must be a port number, got {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Anything that stops the service from coming up.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
