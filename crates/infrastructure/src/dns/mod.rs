pub mod forwarding;
pub mod load_balancer;
pub mod server;
pub mod transport;

pub use forwarding::{DnsForwarder, UpstreamEndpoint};
pub use load_balancer::FailoverStrategy;
pub use server::DnsServerHandler;
