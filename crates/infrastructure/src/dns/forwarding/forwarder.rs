use super::endpoint::UpstreamEndpoint;
use crate::dns::load_balancer::FailoverStrategy;
use async_trait::async_trait;
use devdns_application::ports::UpstreamForwarder;
use devdns_domain::{DomainError, ForwardingConfig};
use hickory_proto::op::Message;
use std::time::Duration;
use tracing::warn;

/// Relays whole query messages to the configured upstream servers
pub struct DnsForwarder {
    servers: Vec<UpstreamEndpoint>,
    timeout: Duration,
    strategy: FailoverStrategy,
}

impl DnsForwarder {
    pub fn new(servers: Vec<UpstreamEndpoint>, timeout: Duration) -> Self {
        Self {
            servers,
            timeout,
            strategy: FailoverStrategy::new(),
        }
    }

    pub fn from_config(config: &ForwardingConfig) -> Self {
        let servers = config
            .servers
            .iter()
            .map(|raw| UpstreamEndpoint::parse(raw))
            .collect();
        Self::new(servers, Duration::from_millis(config.timeout_ms))
    }

    pub fn servers(&self) -> &[UpstreamEndpoint] {
        &self.servers
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl UpstreamForwarder for DnsForwarder {
    async fn forward(&self, query: &Message) -> Result<Message, DomainError> {
        let query_bytes = query.to_vec().map_err(|e| {
            warn!(error = %e, "Cannot encode query for forwarding");
            DomainError::AllUpstreamsFailed
        })?;

        let result = self
            .strategy
            .query(&self.servers, &query_bytes, query.id(), self.timeout)
            .await?;
        Ok(result.response)
    }
}
