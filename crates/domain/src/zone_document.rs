use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Declarative record data as supplied by the operator.
///
/// Maps a domain name to its record declarations. Keys are kept exactly as
/// written; normalization happens when the record store is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ZoneDocument {
    pub domains: BTreeMap<String, DomainEntry>,
}

/// Record declarations of one domain, keyed by record type name in any
/// casing. A `null` list slot declares nothing.
pub type DomainEntry = BTreeMap<String, Vec<Option<RecordFields>>>;

/// One loosely-typed record declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecordFields {
    /// Owner name override; `@` stands for the domain itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<String>,

    /// Only used by MX records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ZoneDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, domain: impl Into<String>, entry: DomainEntry) {
        self.domains.insert(domain.into(), entry);
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl RecordFields {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    pub fn ttl(mut self, ttl: impl Into<String>) -> Self {
        self.ttl = Some(ttl.into());
        self
    }

    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }
}
