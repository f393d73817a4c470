use crate::config::{Config, RecordDescriptor};
use rustc_hash::FxHashMap;

/// Immutable domain → descriptor table answered locally.
///
/// Keys are stored lower-cased without a trailing root dot, and lookups are
/// normalized the same way, so matching is exact but case-insensitive. There is
/// no wildcard or suffix matching.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: FxHashMap<Box<str>, RecordDescriptor>,
}

impl RecordStore {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a RecordDescriptor)>,
    {
        let records = records
            .into_iter()
            .map(|(domain, record)| (normalize(domain).into_boxed_str(), record.clone()))
            .collect();
        Self { records }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::from_records(&config.records)
    }

    pub fn lookup(&self, domain: &str) -> Option<&RecordDescriptor> {
        self.records.get(normalize(domain).as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Drop one trailing root separator and lower-case.
pub fn normalize(domain: &str) -> String {
    domain
        .strip_suffix('.')
        .unwrap_or(domain)
        .to_ascii_lowercase()
}
