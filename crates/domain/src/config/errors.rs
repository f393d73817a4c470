#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}: {1}")]
    NotFound(String, String),

    #[error("config file is malformed: {0}")]
    Malformed(String),

    #[error("Failed to write config file {0}: {1}")]
    FileWrite(String, String),

    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
