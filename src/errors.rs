use thiserror::Error;

use crate::config::ConfigError;
use crate::delivery::DeliveryError;

/// Unified error type for the form, config, and delivery layers.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),
}

pub type Result<T> = std::result::Result<T, ContactError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] ContactError),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Command(err.to_string())
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::Command(err.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Core(ContactError::Config(err))
    }
}
