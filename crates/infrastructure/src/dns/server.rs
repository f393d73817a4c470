use devdns_application::use_cases::ResolveQueryUseCase;
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Wire-level entry point: one inbound datagram in, at most one reply out.
pub struct DnsServerHandler {
    use_case: Arc<ResolveQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ResolveQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Decode, resolve and encode.
    ///
    /// Returns `None` when nothing should be sent back: the datagram is a
    /// response, is too short to carry an id, or the reply failed to encode.
    pub async fn handle_datagram(&self, bytes: &[u8], peer: SocketAddr) -> Option<Vec<u8>> {
        let query = match Message::from_vec(bytes) {
            Ok(message) => message,
            Err(e) => {
                warn!(client = %peer, error = %e, len = bytes.len(), "Undecodable query");
                return format_error_reply(bytes);
            }
        };

        if query.message_type() == MessageType::Response {
            debug!(client = %peer, id = query.id(), "Ignoring inbound response");
            return None;
        }

        let reply = self.use_case.resolve(&query, peer).await;

        match reply.to_vec() {
            Ok(encoded) => Some(encoded),
            Err(e) => {
                error!(client = %peer, id = reply.id(), error = %e, "Failed to encode reply");
                None
            }
        }
    }
}

fn format_error_reply(bytes: &[u8]) -> Option<Vec<u8>> {
    let id = match bytes {
        [hi, lo, ..] => u16::from_be_bytes([*hi, *lo]),
        _ => return None,
    };

    Message::error_msg(id, OpCode::Query, ResponseCode::FormErr)
        .to_vec()
        .map_err(|e| error!(id, error = %e, "Failed to encode FORMERR reply"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_reply_keeps_id() {
        let encoded = format_error_reply(&[0xab, 0xcd, 0xff]).unwrap();
        let reply = Message::from_vec(&encoded).unwrap();
        assert_eq!(reply.id(), 0xabcd);
        assert_eq!(reply.response_code(), ResponseCode::FormErr);
        assert_eq!(reply.message_type(), MessageType::Response);
    }

    #[test]
    fn test_format_error_reply_needs_an_id() {
        assert!(format_error_reply(&[]).is_none());
        assert!(format_error_reply(&[0x01]).is_none());
    }
}
