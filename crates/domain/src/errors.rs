use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Malformed record data for {domain}: {reason}")]
    MalformedRecordData { domain: String, reason: String },

    #[error("Failed to get a response from any upstream server")]
    AllUpstreamsFailed,

    #[error("Invalid upstream address: {0}")]
    InvalidUpstreamAddress(String),

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Transport error talking to {server}: {reason}")]
    TransportIo { server: String, reason: String },

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),
}
