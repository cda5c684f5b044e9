use figment::Error as ConfigError;
use serde_json::Error as JsonError;
use std::io::Error as IoError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors from the outer surfaces of the crate: loading scenarios and configuration.
/// Election operations themselves never fail with this type.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Json(#[from] JsonError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to initialise logging: {0}")]
    Logging(String),
    #[error("Bad scenario: {0}")]
    BadScenario(String),
}
