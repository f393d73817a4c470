use async_trait::async_trait;
use devdns_application::ports::UpstreamForwarder;
use devdns_domain::DomainError;
use hickory_proto::op::Message;
use std::sync::{Arc, RwLock};

/// Forwarder returning a canned upstream reply, or failing like a dead upstream list.
#[derive(Clone)]
pub struct MockUpstreamForwarder {
    reply: Arc<RwLock<Option<Message>>>,
    received: Arc<RwLock<Vec<Message>>>,
}

impl MockUpstreamForwarder {
    pub fn answering(reply: Message) -> Self {
        Self {
            reply: Arc::new(RwLock::new(Some(reply))),
            received: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: Arc::new(RwLock::new(None)),
            received: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.received.read().unwrap().len()
    }

    pub fn received(&self) -> Vec<Message> {
        self.received.read().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamForwarder for MockUpstreamForwarder {
    async fn forward(&self, query: &Message) -> Result<Message, DomainError> {
        self.received.write().unwrap().push(query.clone());

        match self.reply.read().unwrap().as_ref() {
            Some(reply) => {
                let mut reply = reply.clone();
                reply.set_id(query.id());
                Ok(reply)
            }
            None => Err(DomainError::AllUpstreamsFailed),
        }
    }
}
