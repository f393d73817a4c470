//! Record synthesis
//!
//! Turns a configured [`RecordDescriptor`] into a typed `hickory-proto`
//! record. Every kind is built directly from its `RData` variant, so the only
//! way synthesis can fail for a known kind is a `value` that does not parse
//! as the data that kind carries (address or domain name).

use devdns_domain::{DomainError, RecordDescriptor, RecordKind};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, NS, PTR, SRV, TXT};
use hickory_proto::rr::{Name, RData, Record};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Longest single TXT character-string on the wire
const MAX_TXT_STRING_LEN: usize = 255;

/// Builds answer records from configured descriptors
pub struct RecordSynthesizer;

impl RecordSynthesizer {
    /// Build the answer for `question_name` from `descriptor`.
    ///
    /// The record is owned by the question name exactly as asked and carries
    /// the descriptor's TTL. SRV weight and port are always 0 because the
    /// descriptor has no fields for them.
    pub fn synthesize(
        question_name: &Name,
        descriptor: &RecordDescriptor,
    ) -> Result<Record, DomainError> {
        let kind = descriptor.kind()?;
        let rdata = Self::build_rdata(kind, descriptor).map_err(|reason| {
            DomainError::MalformedRecordData {
                domain: question_name.to_ascii(),
                reason,
            }
        })?;

        Ok(Record::from_rdata(question_name.clone(), descriptor.ttl, rdata))
    }

    fn build_rdata(kind: RecordKind, descriptor: &RecordDescriptor) -> Result<RData, String> {
        let value = descriptor.value.trim();

        let rdata = match kind {
            RecordKind::A => RData::A(A(parse_ipv4(value)?)),
            RecordKind::AAAA => RData::AAAA(AAAA(parse_ipv6(value)?)),
            RecordKind::CNAME => RData::CNAME(CNAME(parse_fqdn(value)?)),
            RecordKind::NS => RData::NS(NS(parse_fqdn(value)?)),
            RecordKind::PTR => RData::PTR(PTR(parse_fqdn(value)?)),
            RecordKind::TXT => RData::TXT(TXT::from_bytes(txt_chunks(&descriptor.value))),
            RecordKind::MX => RData::MX(MX::new(descriptor.priority, parse_fqdn(value)?)),
            RecordKind::SRV => RData::SRV(SRV::new(descriptor.priority, 0, 0, parse_fqdn(value)?)),
        };

        Ok(rdata)
    }
}

fn parse_ipv4(value: &str) -> Result<Ipv4Addr, String> {
    value
        .parse()
        .map_err(|e| format!("'{}' is not an IPv4 address: {}", value, e))
}

fn parse_ipv6(value: &str) -> Result<Ipv6Addr, String> {
    value
        .parse()
        .map_err(|e| format!("'{}' is not an IPv6 address: {}", value, e))
}

/// Parse a target hostname, treating it as relative to the root.
fn parse_fqdn(value: &str) -> Result<Name, String> {
    if value.is_empty() || value == "." {
        return Err("empty target name".to_string());
    }

    let absolute = if value.ends_with('.') {
        value.to_string()
    } else {
        format!("{}.", value)
    };

    Name::from_utf8(&absolute).map_err(|e| format!("'{}' is not a domain name: {}", value, e))
}

/// Split a TXT value into wire character-strings of at most 255 bytes.
fn txt_chunks(value: &str) -> Vec<&[u8]> {
    if value.is_empty() {
        return vec![b"".as_slice()];
    }
    value.as_bytes().chunks(MAX_TXT_STRING_LEN).collect()
}
