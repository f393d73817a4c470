use crate::ports::UpstreamForwarder;
use crate::services::RecordSynthesizer;
use devdns_domain::{record_store, RecordStore};
use hickory_proto::op::{Message, MessageType, Query, ResponseCode};
use hickory_proto::rr::Record;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Answers a query message from the record table, forwarding misses upstream.
///
/// Questions are handled one after another and their answers concatenated in
/// question order. A question whose local record cannot be built, or whose
/// forward fails, simply contributes no answers; the reply itself is always
/// produced.
pub struct ResolveQueryUseCase {
    records: Arc<RecordStore>,
    forwarder: Option<Arc<dyn UpstreamForwarder>>,
}

impl ResolveQueryUseCase {
    /// Engine answering from `records` only.
    pub fn new(records: Arc<RecordStore>) -> Self {
        Self {
            records,
            forwarder: None,
        }
    }

    /// Forward names missing from the record table through `forwarder`.
    pub fn with_forwarding(mut self, forwarder: Arc<dyn UpstreamForwarder>) -> Self {
        self.forwarder = Some(forwarder);
        self
    }

    pub async fn resolve(&self, query: &Message, peer: SocketAddr) -> Message {
        let mut reply = Self::reply_to(query);

        for question in query.queries() {
            let answers = self.answer_question(question, query).await;
            reply.add_answers(answers);
        }

        let first = query
            .queries()
            .first()
            .map(|q| q.name().to_ascii())
            .unwrap_or_else(|| "<none>".to_string());
        info!(query = %first, from = %peer, answers = reply.answers().len(), "query");

        reply
    }

    async fn answer_question(&self, question: &Query, query: &Message) -> Vec<Record> {
        let domain = record_store::normalize(&question.name().to_ascii());

        if let Some(descriptor) = self.records.lookup(&domain) {
            return match RecordSynthesizer::synthesize(question.name(), descriptor) {
                Ok(record) => {
                    debug!(domain = %domain, record_type = %descriptor.record_type, "Answered locally");
                    vec![record]
                }
                Err(e) => {
                    warn!(domain = %domain, error = %e, "Skipping local record");
                    Vec::new()
                }
            };
        }

        let Some(forwarder) = &self.forwarder else {
            debug!(domain = %domain, "No local record and forwarding disabled");
            return Vec::new();
        };

        match forwarder.forward(query).await {
            Ok(response) => {
                debug!(
                    domain = %domain,
                    rcode = ?response.response_code(),
                    answers = response.answers().len(),
                    "Relaying upstream answers"
                );
                response.answers().to_vec()
            }
            Err(e) => {
                warn!(domain = %domain, error = %e, "Forwarding failed");
                Vec::new()
            }
        }
    }

    /// Empty reply sharing the query's transaction state. RA stays clear.
    fn reply_to(query: &Message) -> Message {
        let mut reply = Message::new();
        reply
            .set_id(query.id())
            .set_message_type(MessageType::Response)
            .set_op_code(query.op_code())
            .set_recursion_desired(query.recursion_desired())
            .set_checking_disabled(query.checking_disabled())
            .set_response_code(ResponseCode::NoError);
        reply.add_queries(query.queries().to_vec());
        reply
    }
}
