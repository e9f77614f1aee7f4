//! Configuration loader for storefront-rs
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::PathBuf;

use config::{Config, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
const CONFIG_DIR_ENV: &str = "STOREFRONT_CONFIG_DIR";

/// Environment variable for specific configuration file
const CONFIG_FILE_ENV: &str = "STOREFRONT_CONFIG_FILE";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "STOREFRONT";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader that handles layered configuration loading
///
/// The loader supports the following configuration sources (in order of priority):
/// 1. `default.toml` - Base default configuration
/// 2. `{environment}.toml` - Environment-specific configuration (optional)
/// 3. `local.toml` - Local development overrides (optional)
/// 4. `STOREFRONT_*` environment variables (highest priority)
#[derive(Debug)]
pub struct ConfigLoader {
    /// Configuration directory path
    config_dir: PathBuf,
    /// Specific configuration file path (if set, skips layered loading)
    config_file: Option<PathBuf>,
    /// Current application environment
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a new configuration loader
    ///
    /// This reads environment variables to determine:
    /// - Configuration directory (`STOREFRONT_CONFIG_DIR`)
    /// - Specific configuration file (`STOREFRONT_CONFIG_FILE`)
    /// - Application environment (`STOREFRONT_APP_ENV`)
    ///
    /// # Errors
    ///
    /// Returns an error if both `STOREFRONT_CONFIG_DIR` and
    /// `STOREFRONT_CONFIG_FILE` are set, as they are mutually exclusive.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));

        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_file.is_some() && std::env::var(CONFIG_DIR_ENV).is_ok() {
            return Err(ConfigError::mutual_exclusivity(
                "STOREFRONT_CONFIG_DIR and STOREFRONT_CONFIG_FILE cannot both be set. \
                 Use STOREFRONT_CONFIG_DIR for layered configuration or \
                 STOREFRONT_CONFIG_FILE for a single configuration file.",
            ));
        }

        let environment = AppEnvironment::from_env();

        Ok(Self {
            config_dir,
            config_file,
            environment,
        })
    }

    /// Create a loader that reads exactly one configuration file
    pub fn with_file(config_file: PathBuf) -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: Some(config_file),
            environment: AppEnvironment::from_env(),
        }
    }

    /// Overrides the detected environment (used by the --env CLI flag)
    pub fn with_environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    /// Get the current application environment
    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Load configuration from all sources
    ///
    /// If a specific configuration file is set, loads only that file plus
    /// environment variables. Otherwise performs layered loading from the
    /// configuration directory. Missing optional files are skipped silently;
    /// a missing configuration directory falls back to defaults plus
    /// environment variables.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let mut builder = Config::builder();

        if let Some(ref file) = self.config_file {
            builder = builder.add_source(
                File::from(file.clone())
                    .format(FileFormat::Toml)
                    .required(true),
            );
        } else {
            builder = builder
                .add_source(
                    File::from(self.config_dir.join("default"))
                        .format(FileFormat::Toml)
                        .required(false),
                )
                .add_source(
                    File::from(self.config_dir.join(self.environment.as_str()))
                        .format(FileFormat::Toml)
                        .required(false),
                )
                .add_source(
                    File::from(self.config_dir.join("local"))
                        .format(FileFormat::Toml)
                        .required(false),
                );
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_single_file() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            r#"
[server]
host = "0.0.0.0"
port = 8080

[database]
url = "postgres://localhost/storefront_test"

[jwt]
secret = "test_secret_key_at_least_32_characters_long"
"#
        )
        .unwrap();

        let loader = ConfigLoader::with_file(file.path().to_path_buf());
        let settings = loader.load().unwrap();

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.database.url, "postgres://localhost/storefront_test");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_load_missing_directory_falls_back_to_defaults() {
        let loader = ConfigLoader {
            config_dir: PathBuf::from("/nonexistent/config/dir"),
            config_file: None,
            environment: AppEnvironment::Development,
        };

        let settings = loader.load().unwrap();
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.logger.level, "info");
    }
}
