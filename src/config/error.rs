//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration file could not be read or parsed
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// A setting failed validation
    #[error("Invalid configuration for {field}: {message}")]
    ValidationError { field: String, message: String },

    /// An environment variable was missing or malformed
    #[error("Environment variable error: {0}")]
    EnvVarError(String),

    /// Two mutually exclusive settings were both provided
    #[error("{0}")]
    MutualExclusivity(String),
}

impl ConfigError {
    pub fn mutual_exclusivity(message: impl Into<String>) -> Self {
        ConfigError::MutualExclusivity(message.into())
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(error: config::ConfigError) -> Self {
        ConfigError::FileError(error.to_string())
    }
}

impl From<ConfigError> for crate::error::AppError {
    fn from(error: ConfigError) -> Self {
        let key = match &error {
            ConfigError::ValidationError { field, .. } => field.clone(),
            _ => "configuration".to_string(),
        };
        crate::error::AppError::Configuration {
            key,
            source: anyhow::Error::from(error),
        }
    }
}
