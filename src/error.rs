//! Error types for marga-nav

use thiserror::Error;

/// marga-nav error type
#[derive(Error, Debug)]
pub enum MargaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path file format error: {0}")]
    PathFormat(String),

    #[error("SLAM engine error: {0}")]
    Slam(String),

    #[error("Sensor error: {0}")]
    Sensor(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for MargaError {
    fn from(e: toml::de::Error) -> Self {
        MargaError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MargaError>;
