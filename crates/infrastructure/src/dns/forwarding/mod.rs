pub mod endpoint;
pub mod forwarder;

pub use endpoint::UpstreamEndpoint;
pub use forwarder::DnsForwarder;
