//! Turns a declarative zone document into a query-ready [`RecordStore`].
//!
//! Each declaration is rendered as a single zone-file line
//! (`owner ttl IN type [priority] [value]`) and handed to the hickory
//! zone-file parser, so every record that reaches the store is exactly what
//! a master file with the same line would produce.

use super::record_store::{RecordSet, RecordStore};
use hickory_proto::rr::{Name, Record};
use hickory_proto::serialize::txt::Parser;
use mockdns_domain::dns_name;
use mockdns_domain::{DomainError, RecordFields, RecordType, ZoneDocument};
use std::str::FromStr;
use tracing::{debug, error};

const APEX: &str = "@";
const MAX_CHARACTER_STRING: usize = 255;

pub struct ZoneNormalizer {
    default_ttl: String,
}

impl ZoneNormalizer {
    pub fn new(default_ttl: impl Into<String>) -> Self {
        Self {
            default_ttl: default_ttl.into(),
        }
    }

    /// Builds the record store. The first declaration that does not parse
    /// aborts the whole load.
    pub fn normalize(&self, document: &ZoneDocument) -> Result<RecordStore, DomainError> {
        let mut store = RecordStore::new();

        for (domain, entry) in &document.domains {
            let fqdn = dns_name::fqdn(domain);
            let mut set = RecordSet::new(fqdn.clone());

            for (type_name, declarations) in entry {
                let record_type = match RecordType::from_str(type_name) {
                    Ok(rt) => rt,
                    Err(_) => {
                        debug!(domain = %fqdn, record_type = %type_name, "Skipping unsupported record type");
                        continue;
                    }
                };

                for fields in declarations.iter().flatten() {
                    let line = self.record_line(record_type, &fqdn, fields);
                    check_field_count(record_type, fields, &line)?;
                    let record = parse_record_line(&line)?;
                    set.push(record_type, record);
                }
            }

            store.insert(set);
        }

        Ok(store)
    }

    /// Renders one declaration as a zone-file line.
    pub fn record_line(&self, record_type: RecordType, fqdn: &str, fields: &RecordFields) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(5);

        parts.push(match fields.hostname.as_deref() {
            Some(APEX) | None => fqdn.to_string(),
            Some(host) if host.ends_with(fqdn) => host.to_string(),
            Some(host) => format!("{}.{}", host, fqdn),
        });

        parts.push(
            fields
                .ttl
                .clone()
                .unwrap_or_else(|| self.default_ttl.clone()),
        );

        parts.push("IN".to_string());
        parts.push(record_type.as_str().to_string());

        if let Some(rdata) = rdata_text(record_type, fields) {
            parts.push(rdata);
        }

        parts.join(" ")
    }
}

fn rdata_text(record_type: RecordType, fields: &RecordFields) -> Option<String> {
    let mut parts: Vec<String> = Vec::with_capacity(2);

    if record_type.takes_priority() {
        if let Some(priority) = &fields.priority {
            parts.push(priority.clone());
        }
    }

    if let Some(value) = &fields.value {
        if record_type.quotes_value() {
            parts.push(quote_txt(value));
        } else {
            parts.push(value.clone());
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// The zone-file parser stops reading once a type's rdata is complete, so
/// trailing tokens would otherwise be dropped without notice.
fn check_field_count(
    record_type: RecordType,
    fields: &RecordFields,
    line: &str,
) -> Result<(), DomainError> {
    let Some(expected) = record_type.rdata_fields() else {
        return Ok(());
    };

    let found = rdata_text(record_type, fields)
        .map(|rdata| count_fields(&rdata))
        .unwrap_or(0);

    if found > expected {
        return Err(malformed(
            line,
            format!(
                "garbage after rdata: {} takes {} field(s), found {}",
                record_type, expected, found
            ),
        ));
    }

    Ok(())
}

/// Counts whitespace-separated fields. A double-quoted run, backslash
/// escapes included, is one field.
fn count_fields(rdata: &str) -> usize {
    let mut count = 0;
    let mut in_field = false;
    let mut in_quotes = false;
    let mut escaped = false;

    for c in rdata.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        if c.is_whitespace() && !in_quotes {
            in_field = false;
            continue;
        }
        if !in_field {
            in_field = true;
            count += 1;
        }
        match c {
            '\\' => escaped = true,
            '"' => in_quotes = !in_quotes,
            _ => {}
        }
    }

    count
}

/// Splits a TXT value into character-strings of at most 255 bytes, cut on
/// char boundaries, each one quoted.
fn quote_txt(value: &str) -> String {
    let mut chunks: Vec<String> = Vec::new();
    let mut rest = value;

    while rest.len() > MAX_CHARACTER_STRING {
        let mut end = MAX_CHARACTER_STRING;
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        let (head, tail) = rest.split_at(end);
        chunks.push(quote_character_string(head));
        rest = tail;
    }
    chunks.push(quote_character_string(rest));

    chunks.join(" ")
}

fn quote_character_string(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

fn malformed(line: &str, reason: String) -> DomainError {
    error!(line = %line, error = %reason, "Failed to parse record");
    DomainError::MalformedRecord {
        line: line.to_string(),
        reason,
    }
}

/// Parses a single zone-file line into a record. Relative names in the
/// rdata are completed against the root.
pub fn parse_record_line(line: &str) -> Result<Record, DomainError> {
    let (_, records) = Parser::new(line, None, Some(Name::root()))
        .parse()
        .map_err(|e| malformed(line, e.to_string()))?;

    let mut records: Vec<Record> = records
        .into_values()
        .flat_map(|rrset| rrset.records_without_rrsigs().cloned().collect::<Vec<_>>())
        .collect();

    match records.len() {
        1 => Ok(records.remove(0)),
        0 => Err(malformed(line, "line produced no record".to_string())),
        n => Err(malformed(line, format!("line produced {} records", n))),
    }
}
