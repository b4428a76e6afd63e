use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};
use std::io::Write;
use std::str::FromStr;
use tempfile::NamedTempFile;

pub const SAMPLE_ZONE: &str = r#"{
    "a.test.": {
        "A": [{"value": "192.0.2.1"}, {"hostname": "www", "value": "192.0.2.2"}],
        "AAAA": [{"value": "2001:db8::1"}],
        "NS": [{"value": "ns1.a.test."}],
        "TXT": [{"value": "hello big  world"}]
    }
}"#;

pub fn query_message(id: u16, qname: &str, record_type: RecordType) -> Message {
    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(Query::query(
        Name::from_str(qname).expect("valid test name"),
        record_type,
    ));
    message
}

pub fn temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
