//! Error types for the messenger.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MessengerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, MessengerError>;
