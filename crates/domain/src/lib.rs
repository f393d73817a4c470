//! devdns domain layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod record_store;

pub use config::{CliOverrides, Config, ConfigError, ForwardingConfig, RecordDescriptor};
pub use dns_record::RecordKind;
pub use errors::DomainError;
pub use record_store::RecordStore;
