use crate::{DomainError, RecordKind};
use serde::{Deserialize, Serialize};

/// One configured answer for a domain.
///
/// The `type` text is kept as written in the config file and only parsed when
/// the record is answered, so a descriptor with an unknown kind still loads
/// and fails per question instead of at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecordDescriptor {
    /// Record kind: "A", "AAAA", "CNAME", "TXT", "NS", "PTR", "MX" or "SRV"
    #[serde(rename = "type")]
    pub record_type: String,

    /// Address, hostname or text depending on the kind
    pub value: String,

    /// MX preference / SRV priority, ignored by other kinds
    #[serde(default, skip_serializing_if = "is_zero_u16")]
    pub priority: u16,

    /// TTL in seconds; 0 when the config does not set one
    #[serde(default, skip_serializing_if = "is_zero_u32")]
    pub ttl: u32,
}

impl RecordDescriptor {
    pub fn new(record_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            record_type: record_type.into(),
            value: value.into(),
            priority: 0,
            ttl: 0,
        }
    }

    pub fn with_priority(mut self, priority: u16) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn kind(&self) -> Result<RecordKind, DomainError> {
        self.record_type.parse()
    }
}

fn is_zero_u16(v: &u16) -> bool {
    *v == 0
}

fn is_zero_u32(v: &u32) -> bool {
    *v == 0
}
