use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use validator::Validate;

/// Errors raised when building a client from configuration
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Expected config object but got null or no endpoint provided")]
    MissingEndpoint,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Absent when neither file nor environment names a profile service
    #[serde(default)]
    pub profile_service: Option<ClientConfig>,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Connection settings for the profile service
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ClientConfig {
    /// Base URL, concatenated verbatim with `api/...`
    #[serde(default)]
    #[validate(length(min = 1))]
    pub endpoint: Option<String>,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
        }
    }

    /// The endpoint, provided it is present and non-empty
    pub fn validated_endpoint(&self) -> Result<&str, ConfigurationError> {
        self.validate()
            .map_err(|_| ConfigurationError::MissingEndpoint)?;

        self.endpoint
            .as_deref()
            .ok_or(ConfigurationError::MissingEndpoint)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with MOBILSOEG__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MOBILSOEG__PROFILE_SERVICE__ENDPOINT -> profile_service.endpoint
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("MOBILSOEG")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Settings {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "compact");
    }

    #[test]
    fn test_endpoint_from_file() {
        let settings = from_toml(
            r#"
            [profile_service]
            endpoint = "http://profile.test:3001/"

            [logging]
            level = "debug"
            "#,
        );

        let config = settings.profile_service.unwrap();
        assert_eq!(config.validated_endpoint().unwrap(), "http://profile.test:3001/");
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.logging.format, "compact");
    }

    #[test]
    fn test_missing_section_is_none() {
        let settings = from_toml("[logging]\nformat = \"pretty\"\n");
        assert!(settings.profile_service.is_none());
    }

    #[test]
    fn test_blank_endpoint_in_file() {
        let settings = from_toml("[profile_service]\nendpoint = \"\"\n");
        let config = settings.profile_service.unwrap();
        assert!(matches!(
            config.validated_endpoint(),
            Err(ConfigurationError::MissingEndpoint)
        ));
    }

    #[test]
    fn test_missing_endpoint_message() {
        assert_eq!(
            ConfigurationError::MissingEndpoint.to_string(),
            "Expected config object but got null or no endpoint provided"
        );
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        assert!(ClientConfig::new("").validated_endpoint().is_err());
        assert!(ClientConfig::default().validated_endpoint().is_err());
    }
}
