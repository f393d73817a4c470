use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use super::errors::ConfigError;
use super::forwarding::ForwardingConfig;
use super::logging::LoggingConfig;
use super::records::RecordDescriptor;
use super::server::ServerConfig;

/// Configured records keyed by bare domain name (no trailing dot)
pub type Records = BTreeMap<String, RecordDescriptor>;

/// Main configuration structure
///
/// Loaded once at startup and handed to the components that need it; nothing
/// reads it through global state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Upstream forwarding for unknown names
    #[serde(default)]
    pub forwarding: ForwardingConfig,

    /// Listener address and port
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Static zone
    #[serde(default)]
    pub records: Records,
}

impl Default for Config {
    fn default() -> Self {
        let mut records = Records::new();
        records.insert(
            "test.com".to_string(),
            RecordDescriptor::new("A", "127.0.0.1").with_ttl(600),
        );
        records.insert(
            "www.test.com".to_string(),
            RecordDescriptor::new("CNAME", "test.com").with_ttl(600),
        );
        records.insert(
            "mail.test.com".to_string(),
            RecordDescriptor::new("MX", "mail.somehost.com")
                .with_priority(10)
                .with_ttl(60),
        );

        Self {
            forwarding: ForwardingConfig::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            records,
        }
    }
}

impl Config {
    /// Default config location: `$HOME/.devdns/config.json`, falling back to
    /// `./devdns.json` when no home directory is known.
    pub fn default_path() -> PathBuf {
        match std::env::var_os("HOME") {
            Some(home) if !home.is_empty() => {
                PathBuf::from(home).join(".devdns").join("config.json")
            }
            _ => PathBuf::from("devdns.json"),
        }
    }

    /// Load configuration from `path` and apply command-line overrides
    pub fn load(path: &Path, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::NotFound(path.display().to_string(), e.to_string()))?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(contents).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    pub fn to_pretty_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Checks that would make the listener fail to start.
    ///
    /// Record descriptors are deliberately not checked here; see
    /// [`Config::unsupported_records`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bind = self.server.bind_address.trim();
        if !bind.is_empty() && bind.parse::<IpAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "bind_address '{}' is not an IP address",
                bind
            )));
        }
        if self.forwarding.enabled && self.forwarding.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "forwarding.timeout_ms cannot be 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Records whose `type` will be rejected when queried
    pub fn unsupported_records(&self) -> Vec<(&str, &RecordDescriptor)> {
        self.records
            .iter()
            .filter(|(_, record)| record.kind().is_err())
            .map(|(domain, record)| (domain.as_str(), record))
            .collect()
    }

    /// Save configuration to file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = self.to_pretty_json()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::FileWrite(path.display().to_string(), e.to_string()))?;
        }
        std::fs::write(path, json)
            .map_err(|e| ConfigError::FileWrite(path.display().to_string(), e.to_string()))?;
        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}
