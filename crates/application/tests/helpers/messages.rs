use devdns_domain::{Config, RecordStore};
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record, RecordType};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

pub const PEER: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 100)), 40000);

/// Store built from the default config: test.com (A), www.test.com (CNAME), mail.test.com (MX)
pub fn default_store() -> Arc<RecordStore> {
    Arc::new(RecordStore::from_config(&Config::default()))
}

/// Name kept byte-for-byte as written, case included
pub fn name(name: &str) -> Name {
    Name::from_ascii(name).unwrap()
}

pub fn query(id: u16, questions: &[(&str, RecordType)]) -> Message {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    for (qname, qtype) in questions {
        message.add_query(Query::query(name(qname), *qtype));
    }
    message
}

pub fn a_record(owner: &str, ip: Ipv4Addr, ttl: u32) -> Record {
    Record::from_rdata(name(owner), ttl, RData::A(A(ip)))
}

pub fn upstream_reply(code: ResponseCode, answers: Vec<Record>) -> Message {
    let mut message = Message::new();
    message
        .set_message_type(MessageType::Response)
        .set_response_code(code);
    message.add_answers(answers);
    message
}
