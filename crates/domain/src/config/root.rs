use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::proxy::ProxyConfig;
use super::server::ServerConfig;
use super::zone::ZoneConfig;

const LOCAL_CONFIG_PATH: &str = "mockdns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/mockdns/config.toml";

/// Main configuration structure, built once at startup and handed to each
/// component by reference.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listening address
    #[serde(default)]
    pub server: ServerConfig,

    /// Record document and record defaults
    #[serde(default)]
    pub zone: ZoneConfig,

    /// Upstream forwarding
    #[serde(default)]
    pub proxy: ProxyConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. mockdns.toml in current directory
    /// 3. /etc/mockdns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(data_file) = overrides.data_file {
            self.zone.data_file = Some(data_file);
        }
        if let Some(ttl) = overrides.default_ttl {
            self.zone.default_ttl = ttl;
        }
        if let Some(resolv_conf) = overrides.resolv_conf {
            self.proxy.resolv_conf = resolv_conf;
        }
        if let Some(enabled) = overrides.proxy {
            self.proxy.enabled = enabled;
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        match self.zone.data_file.as_deref() {
            None | Some("") => {
                return Err(ConfigError::Validation("Data file required".to_string()));
            }
            Some(_) => {}
        }

        let ttl = self.zone.default_ttl.trim();
        if ttl.is_empty() || ttl.contains(char::is_whitespace) {
            return Err(ConfigError::Validation(format!(
                "Invalid default TTL: {:?}",
                self.zone.default_ttl
            )));
        }

        if self.proxy.enabled && self.proxy.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Upstream timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub data_file: Option<String>,
    pub default_ttl: Option<String>,
    pub resolv_conf: Option<String>,
    pub proxy: Option<bool>,
    pub verbose: Option<bool>,
    pub log_level: Option<String>,
}
