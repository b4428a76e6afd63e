use crate::services::{RecordSet, RecordTypeMapper};
use hickory_proto::op::Query;
use hickory_proto::rr::{Record, RecordType as HickoryRecordType};
use mockdns_domain::RecordType;

/// Answer, authority and additional sections of a locally answered query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseSections {
    pub answers: Vec<Record>,
    pub authority: Vec<Record>,
    pub additionals: Vec<Record>,
}

/// Builds response sections from a domain's record set.
pub struct QueryResolver;

impl QueryResolver {
    /// Answers every question from `set`.
    ///
    /// An unknown or absent type yields no answers and is not an error. NS
    /// records always fill the authority section and A/AAAA records always
    /// fill the additional section, whatever was asked.
    pub fn resolve(queries: &[Query], set: &RecordSet) -> ResponseSections {
        let mut sections = ResponseSections::default();

        for query in queries {
            if query.query_type() == HickoryRecordType::ANY {
                sections.answers.extend(set.all().cloned());
            } else if let Some(record_type) = RecordTypeMapper::from_hickory(query.query_type()) {
                sections
                    .answers
                    .extend_from_slice(set.get(record_type));
            }
        }

        sections
            .authority
            .extend_from_slice(set.get(RecordType::NS));

        sections.additionals.extend_from_slice(set.get(RecordType::A));
        sections
            .additionals
            .extend_from_slice(set.get(RecordType::AAAA));

        sections
    }
}
