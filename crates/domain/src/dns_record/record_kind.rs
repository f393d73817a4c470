use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// Record kinds a descriptor can be answered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    A,
    AAAA,
    CNAME,
    TXT,
    NS,
    PTR,
    MX,
    SRV,
}

impl RecordKind {
    pub const ALL: [RecordKind; 8] = [
        RecordKind::A,
        RecordKind::AAAA,
        RecordKind::CNAME,
        RecordKind::TXT,
        RecordKind::NS,
        RecordKind::PTR,
        RecordKind::MX,
        RecordKind::SRV,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::A => "A",
            RecordKind::AAAA => "AAAA",
            RecordKind::CNAME => "CNAME",
            RecordKind::TXT => "TXT",
            RecordKind::NS => "NS",
            RecordKind::PTR => "PTR",
            RecordKind::MX => "MX",
            RecordKind::SRV => "SRV",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnsupportedRecordType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_kinds() {
        for kind in RecordKind::ALL {
            assert_eq!(kind.as_str().parse::<RecordKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("mx".parse::<RecordKind>(), Ok(RecordKind::MX));
        assert_eq!(" Aaaa ".parse::<RecordKind>(), Ok(RecordKind::AAAA));
    }

    #[test]
    fn test_parse_unsupported_kind() {
        assert_eq!(
            "HINFO".parse::<RecordKind>(),
            Err(DomainError::UnsupportedRecordType("HINFO".into()))
        );
        assert!("".parse::<RecordKind>().is_err());
    }
}
