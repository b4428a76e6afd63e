mod helpers;

use helpers::{temp_file, SAMPLE_ZONE};
use mockdns_domain::{DomainError, RecordType};
use mockdns_infrastructure::ZoneLoader;

#[tokio::test]
async fn test_load_sample_document() {
    let file = temp_file(SAMPLE_ZONE);

    let store = ZoneLoader::new("3600").load(file.path()).await.unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.record_count(), 5);
    let set = store.get("a.test.").unwrap();
    assert_eq!(set.get(RecordType::A).len(), 2);
    assert_eq!(set.get(RecordType::NS)[0].ttl(), 3600);
}

#[tokio::test]
async fn test_missing_file_is_zone_load_error() {
    let dir = tempfile::tempdir().unwrap();

    let result = ZoneLoader::new("3600").load(&dir.path().join("zone.json")).await;

    assert!(matches!(result, Err(DomainError::ZoneLoad(_))));
}

#[tokio::test]
async fn test_invalid_json_is_zone_load_error() {
    let file = temp_file(r#"{"a.test.": {"A": [{"value": "192.0.2.1"}]"#);

    let result = ZoneLoader::new("3600").load(file.path()).await;

    assert!(matches!(result, Err(DomainError::ZoneLoad(_))));
}

#[tokio::test]
async fn test_bad_record_aborts_load() {
    let file = temp_file(r#"{"a.test.": {"AAAA": [{"value": "192.0.2.1"}]}}"#);

    let result = ZoneLoader::new("3600").load(file.path()).await;

    assert!(matches!(result, Err(DomainError::MalformedRecord { .. })));
}

#[test]
fn test_parse_document_ignores_unknown_fields() {
    let document =
        ZoneLoader::parse_document(r#"{"a.test.":{"A":[{"value":"192.0.2.1","comment":"x"}]}}"#)
            .unwrap();
    assert_eq!(document.len(), 1);
}
