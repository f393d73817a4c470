//! Configuration for devdns
//!
//! - `root`: main configuration and CLI overrides
//! - `server`: listener address and port
//! - `forwarding`: upstream servers
//! - `logging`: logging settings
//! - `records`: static record descriptors
//! - `errors`: configuration errors

pub mod errors;
pub mod forwarding;
pub mod logging;
pub mod records;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use forwarding::ForwardingConfig;
pub use logging::LoggingConfig;
pub use records::RecordDescriptor;
pub use root::{CliOverrides, Config, Records};
pub use server::ServerConfig;
