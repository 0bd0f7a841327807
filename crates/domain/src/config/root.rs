use serde::{Deserialize, Serialize};
use std::path::Path;

use super::cache::CacheConfig;
use super::duration::{check_probe_timeout, parse_duration, validate_timeout};
use super::errors::ConfigError;
use super::logging::{LogLevel, LoggingConfig};
use super::probe::ProbeConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;

const LOCAL_CONFIG_PATH: &str = "ssllabs-exporter.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ssllabs-exporter/config.toml";

/// Main configuration structure for the exporter
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP listener
    #[serde(default)]
    pub server: ServerConfig,

    /// Probe deadline
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Result cache
    #[serde(default)]
    pub cache: CacheConfig,

    /// SSLLabs API access
    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ssllabs-exporter.toml in current directory
    /// 3. /etc/ssllabs-exporter/config.toml
    /// 4. Default configuration
    ///
    /// Command-line values always win over the file.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides)?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) -> Result<(), ConfigError> {
        if let Some(address) = overrides.listen_address {
            self.server.listen_address = address;
        }
        if let Some(timeout) = overrides.timeout {
            self.probe.timeout = validate_timeout(&timeout)?;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level.parse::<LogLevel>()?;
        }
        if let Some(retention) = overrides.cache_retention {
            self.cache.retention = parse_duration(&retention)?;
        }
        if overrides.cache_ignore_failed {
            self.cache.ignore_failed = true;
        }
        if let Some(url) = overrides.api_url {
            self.upstream.api_url = url;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probe_timeout(self.probe.timeout)?;

        if self.cache.retention.is_zero() {
            return Err(ConfigError::Validation(
                "cache retention must be greater than 0".to_string(),
            ));
        }

        if self.cache.prune_delay.is_zero() {
            return Err(ConfigError::Validation(
                "cache prune delay must be greater than 0".to_string(),
            ));
        }

        if self.upstream.api_url.is_empty() {
            return Err(ConfigError::Validation(
                "SSLLabs API URL cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub listen_address: Option<String>,
    pub timeout: Option<String>,
    pub log_level: Option<String>,
    pub cache_retention: Option<String>,
    pub cache_ignore_failed: bool,
    pub api_url: Option<String>,
}
