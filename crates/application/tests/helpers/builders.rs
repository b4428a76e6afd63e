use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record, RecordType};
use mockdns_application::services::{RecordStore, ZoneNormalizer};
use mockdns_application::use_cases::dns::handle_dns_query::reply_to;
use mockdns_domain::{DomainError, ZoneDocument};
use std::net::Ipv4Addr;
use std::str::FromStr;

pub const DEFAULT_TTL: &str = "3600";

pub const SAMPLE_ZONE: &str = r#"{
    "a.test.": {
        "A": [{"value": "192.0.2.1"}, {"hostname": "www", "value": "192.0.2.2"}],
        "AAAA": [{"value": "2001:db8::1"}],
        "NS": [{"value": "ns1.a.test."}, {"value": "ns2.a.test."}],
        "MX": [{"priority": "10", "value": "mail.a.test."}],
        "TXT": [{"value": "v=spf1 -all"}]
    },
    "b.test.": {
        "CNAME": [{"hostname": "alias", "value": "a.test."}]
    }
}"#;

pub fn document(json: &str) -> ZoneDocument {
    serde_json::from_str(json).expect("test document must be valid JSON")
}

pub fn load(json: &str) -> Result<RecordStore, DomainError> {
    ZoneNormalizer::new(DEFAULT_TTL).normalize(&document(json))
}

pub fn sample_store() -> RecordStore {
    load(SAMPLE_ZONE).expect("sample zone must load")
}

pub fn name(s: &str) -> Name {
    Name::from_str(s).expect("valid test name")
}

pub fn query(qname: &str, record_type: RecordType) -> Query {
    Query::query(name(qname), record_type)
}

pub fn query_message(qname: &str, record_type: RecordType) -> Message {
    let mut message = Message::new(0x1234, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query(qname, record_type));
    message
}

/// A NOERROR upstream reply carrying one A record.
pub fn upstream_reply(request: &Message, ip: Ipv4Addr) -> Message {
    let mut reply = reply_to(request);
    let owner = request
        .queries()
        .first()
        .map(|q| q.name().clone())
        .unwrap_or_else(Name::root);
    reply.add_answer(Record::from_rdata(owner, 60, RData::A(A(ip))));
    reply
}
