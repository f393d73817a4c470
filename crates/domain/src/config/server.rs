use serde::{de, Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address; empty means every IPv4 interface
    #[serde(default)]
    pub bind_address: String,

    /// Written as a number; a quoted number (`"53"`) is accepted on load
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Socket address string the UDP listener binds to.
    pub fn listen_addr(&self) -> String {
        let host = match self.bind_address.trim() {
            "" => "0.0.0.0",
            host => host,
        };
        if host.contains(':') && !host.starts_with('[') {
            format!("[{}]:{}", host, self.port)
        } else {
            format!("{}:{}", host, self.port)
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: String::new(),
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    53
}

fn deserialize_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Number(u16),
        Text(String),
    }

    match Port::deserialize(deserializer)? {
        Port::Number(port) => Ok(port),
        Port::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid port '{}'", text))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listen_addr_defaults_to_all_interfaces() {
        assert_eq!(ServerConfig::default().listen_addr(), "0.0.0.0:53");
    }

    #[test]
    fn test_listen_addr_ipv6() {
        let config = ServerConfig {
            bind_address: "::1".to_string(),
            port: 5353,
        };
        assert_eq!(config.listen_addr(), "[::1]:5353");
    }

    #[test]
    fn test_port_accepts_number_or_quoted_number() {
        let numeric: ServerConfig = serde_json::from_str(r#"{"port": 5353}"#).unwrap();
        let quoted: ServerConfig = serde_json::from_str(r#"{"port": "5353"}"#).unwrap();
        assert_eq!(numeric.port, 5353);
        assert_eq!(quoted.port, 5353);
    }

    #[test]
    fn test_port_rejects_non_numeric_text() {
        assert!(serde_json::from_str::<ServerConfig>(r#"{"port": "dns"}"#).is_err());
        assert!(serde_json::from_str::<ServerConfig>(r#"{"port": "70000"}"#).is_err());
    }
}
