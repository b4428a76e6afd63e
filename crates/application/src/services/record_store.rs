use hickory_proto::rr::Record;
use mockdns_domain::dns_name::{self, self_and_ancestors};
use mockdns_domain::RecordType;
use std::collections::{BTreeMap, HashMap};

/// All records owned by one domain, grouped by type.
///
/// A type is only present once at least one record was added for it, and
/// records keep the order in which they were pushed.
#[derive(Debug, Clone)]
pub struct RecordSet {
    fqdn: String,
    records: BTreeMap<RecordType, Vec<Record>>,
}

impl RecordSet {
    pub fn new(fqdn: impl Into<String>) -> Self {
        Self {
            fqdn: fqdn.into(),
            records: BTreeMap::new(),
        }
    }

    pub fn fqdn(&self) -> &str {
        &self.fqdn
    }

    pub fn push(&mut self, record_type: RecordType, record: Record) {
        self.records.entry(record_type).or_default().push(record);
    }

    pub fn get(&self, record_type: RecordType) -> &[Record] {
        self.records
            .get(&record_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn types(&self) -> impl Iterator<Item = RecordType> + '_ {
        self.records.keys().copied()
    }

    /// Every record of every type, types in `RecordType` order.
    pub fn all(&self) -> impl Iterator<Item = &Record> {
        self.records.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn absorb(&mut self, other: RecordSet) {
        for (record_type, records) in other.records {
            self.records.entry(record_type).or_default().extend(records);
        }
    }
}

/// Read-only lookup table from fully-qualified, lower-cased domain name to
/// its record set. Built once before serving starts.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    sets: HashMap<String, RecordSet>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `set` under its domain. A second set for the same domain is
    /// appended to the first.
    pub fn insert(&mut self, set: RecordSet) {
        match self.sets.get_mut(set.fqdn()) {
            Some(existing) => existing.absorb(set),
            None => {
                self.sets.insert(set.fqdn().to_string(), set);
            }
        }
    }

    pub fn get(&self, domain: &str) -> Option<&RecordSet> {
        self.sets.get(&dns_name::fqdn(domain))
    }

    /// Finds the record set responsible for `name`: the stored domain equal
    /// to `name` or, failing that, its closest stored ancestor.
    pub fn find_zone(&self, name: &str) -> Option<&RecordSet> {
        let name = dns_name::fqdn(name);
        let found = self_and_ancestors(&name).find_map(|candidate| self.sets.get(candidate));
        found
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.get(domain).is_some()
    }

    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    pub fn record_count(&self) -> usize {
        self.sets.values().map(RecordSet::len).sum()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
