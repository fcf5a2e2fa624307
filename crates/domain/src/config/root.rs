use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::local_records::StaticRecord;
use super::logging::LoggingConfig;
use super::responder::{ResponderConfig, MIN_UDP_SIZE};
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-responder.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-responder/config.toml";

/// Main configuration structure for Ferrous Responder
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Query core settings (TTLs, size limits)
    #[serde(default)]
    pub responder: ResponderConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Static entries loaded into the zone registry at startup
    #[serde(default)]
    pub records: Vec<StaticRecord>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-responder.toml in current directory
    /// 3. /etc/ferrous-responder/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
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

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        let responder = &self.responder;
        if responder.min_udp_size < MIN_UDP_SIZE {
            return Err(ConfigError::Validation(format!(
                "min_udp_size must be at least {}",
                MIN_UDP_SIZE
            )));
        }
        if responder.max_message_size < responder.min_udp_size {
            return Err(ConfigError::Validation(format!(
                "max_message_size ({}) is below min_udp_size ({})",
                responder.max_message_size, responder.min_udp_size
            )));
        }
        if responder.edns_udp_size < MIN_UDP_SIZE {
            return Err(ConfigError::Validation(format!(
                "edns_udp_size must be at least {}",
                MIN_UDP_SIZE
            )));
        }

        for record in &self.records {
            if record.hostname.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "Static record with empty hostname".to_string(),
                ));
            }
            record
                .ip_addr()
                .map_err(|e| ConfigError::Validation(format!("{} ({})", e, record.hostname)))?;
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}
