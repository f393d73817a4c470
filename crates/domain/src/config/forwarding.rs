use serde::{Deserialize, Serialize};

/// Upstream forwarding for names the record table does not know
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ForwardingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Upstream endpoints ("ip:port", bare "ip" or "host:port"), tried in order
    #[serde(default = "default_servers")]
    pub servers: Vec<String>,

    /// Per-server exchange timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ForwardingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            servers: default_servers(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_servers() -> Vec<String> {
    vec!["8.8.8.8:53".to_string(), "8.8.4.4:53".to_string()]
}

fn default_timeout_ms() -> u64 {
    2000
}
