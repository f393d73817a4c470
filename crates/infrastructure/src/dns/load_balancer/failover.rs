use super::query::{query_server, QueryAttemptResult};
use crate::dns::forwarding::UpstreamEndpoint;
use devdns_domain::DomainError;
use std::time::Duration;
use tracing::{debug, warn};

/// Tries upstreams one after another in configured order.
///
/// One exchange per server, no retries and no memory of past failures.
pub struct FailoverStrategy;

impl FailoverStrategy {
    pub fn new() -> Self {
        Self
    }

    pub async fn query(
        &self,
        servers: &[UpstreamEndpoint],
        query_bytes: &[u8],
        query_id: u16,
        timeout: Duration,
    ) -> Result<QueryAttemptResult, DomainError> {
        if servers.is_empty() {
            return Err(DomainError::AllUpstreamsFailed);
        }
        debug!(strategy = "failover", servers = servers.len(), "Trying sequentially");

        for (index, endpoint) in servers.iter().enumerate() {
            match query_server(endpoint, query_bytes, query_id, timeout).await {
                Ok(result) => {
                    debug!(
                        server = %result.server_addr,
                        latency_ms = result.latency_ms,
                        position = index,
                        "Server responded"
                    );
                    return Ok(result);
                }
                Err(e) => {
                    warn!(server = %endpoint, error = %e, position = index, "Failing over");
                }
            }
        }
        Err(DomainError::AllUpstreamsFailed)
    }
}

impl Default for FailoverStrategy {
    fn default() -> Self {
        Self::new()
    }
}
