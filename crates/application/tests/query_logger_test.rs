mod helpers;

use helpers::query;
use hickory_proto::rr::RecordType as HickoryRecordType;
use mockdns_application::services::QueryLogger;
use mockdns_domain::{QueryOutcome, QueryRoute};

#[test]
fn test_render_local_success() {
    let lines = QueryLogger::render(
        &[query("a.test.", HickoryRecordType::A)],
        QueryRoute::Local,
        QueryOutcome::Success,
    );
    assert_eq!(lines, vec!["[O,S]: a.test. IN A"]);
}

#[test]
fn test_render_one_line_per_question() {
    let lines = QueryLogger::render(
        &[
            query("example.org.", HickoryRecordType::MX),
            query("example.org.", HickoryRecordType::AAAA),
        ],
        QueryRoute::Proxied,
        QueryOutcome::Failure,
    );
    assert_eq!(
        lines,
        vec!["[P,F]: example.org. IN MX", "[P,F]: example.org. IN AAAA"]
    );
}

#[test]
fn test_render_terminal() {
    let lines = QueryLogger::render(
        &[query("nowhere.test.", HickoryRecordType::TXT)],
        QueryRoute::Terminal,
        QueryOutcome::Failure,
    );
    assert_eq!(lines, vec!["[T,F]: nowhere.test. IN TXT"]);
}

#[test]
fn test_quiet_logger_is_not_verbose() {
    assert!(!QueryLogger::new(false).is_verbose());
    assert!(QueryLogger::new(true).is_verbose());
}
