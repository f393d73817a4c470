use async_trait::async_trait;
use devdns_domain::DomainError;
use hickory_proto::op::Message;

#[async_trait]
pub trait UpstreamForwarder: Send + Sync {
    /// Relay `query` upstream and return the first reply that arrived intact.
    ///
    /// A reply carrying a DNS error code (NXDOMAIN, SERVFAIL, ...) is still a
    /// success; only transport failures move on to the next server, and
    /// [`DomainError::AllUpstreamsFailed`] is returned once every server failed.
    async fn forward(&self, query: &Message) -> Result<Message, DomainError>;
}
