use crate::dns::forwarding::UpstreamEndpoint;
use crate::dns::transport::udp::UdpTransport;
use crate::dns::transport::DnsTransport;
use devdns_domain::DomainError;
use hickory_proto::op::Message;
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tracing::debug;

/// Result of a single-server query attempt
pub struct QueryAttemptResult {
    pub response: Message,
    pub server_addr: SocketAddr,
    pub latency_ms: u64,
}

/// Execute one exchange with a single upstream server.
///
/// `timeout` bounds the whole attempt: endpoint resolution plus the UDP
/// exchange. A reply that does not decode, or whose transaction id is not
/// `query_id`, is an error like any socket failure. The DNS response code is
/// not inspected.
pub async fn query_server(
    endpoint: &UpstreamEndpoint,
    query_bytes: &[u8],
    query_id: u16,
    timeout: Duration,
) -> Result<QueryAttemptResult, DomainError> {
    let start = Instant::now();

    let server_addr = tokio::time::timeout(timeout, endpoint.resolve())
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: endpoint.to_string(),
        })??;

    let transport = UdpTransport::new(server_addr);
    let remaining = remaining_budget(timeout, start.elapsed(), server_addr)?;
    let transport_response = transport.send(query_bytes, remaining).await?;

    let response = Message::from_vec(&transport_response.bytes).map_err(|e| {
        DomainError::InvalidDnsResponse(format!("undecodable reply from {}: {}", server_addr, e))
    })?;

    if response.id() != query_id {
        return Err(DomainError::InvalidDnsResponse(format!(
            "reply from {} has id {}, expected {}",
            server_addr,
            response.id(),
            query_id
        )));
    }

    let latency_ms = start.elapsed().as_millis() as u64;
    debug!(
        server = %server_addr,
        protocol = transport.protocol_name(),
        rcode = ?response.response_code(),
        answers = response.answers().len(),
        latency_ms,
        "Upstream replied"
    );

    Ok(QueryAttemptResult {
        response,
        server_addr,
        latency_ms,
    })
}

/// Time left for the exchange once resolution has used `elapsed` of `timeout`.
fn remaining_budget(
    timeout: Duration,
    elapsed: Duration,
    server_addr: SocketAddr,
) -> Result<Duration, DomainError> {
    match timeout.checked_sub(elapsed) {
        Some(remaining) if !remaining.is_zero() => Ok(remaining),
        _ => Err(DomainError::TransportTimeout {
            server: server_addr.to_string(),
        }),
    }
}
