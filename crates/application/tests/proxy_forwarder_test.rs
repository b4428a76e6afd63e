mod helpers;

use helpers::{query_message, upstream_reply, MockUpstreamExchange};
use hickory_proto::rr::RecordType;
use mockdns_application::use_cases::ProxyForwarder;
use mockdns_domain::DomainError;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

fn server(last_octet: u8) -> SocketAddr {
    SocketAddr::from(([198, 51, 100, last_octet], 53))
}

#[tokio::test]
async fn test_disabled_forwarder_refuses() {
    let forwarder = ProxyForwarder::disabled();
    assert!(!forwarder.is_enabled());

    let result = forwarder.forward(&query_message("example.org.", RecordType::A)).await;
    assert_eq!(result.unwrap_err(), DomainError::NotProxied);
}

#[tokio::test]
async fn test_first_healthy_upstream_answers() {
    let request = query_message("example.org.", RecordType::A);
    let reply = upstream_reply(&request, Ipv4Addr::new(203, 0, 113, 7));
    let mock = Arc::new(MockUpstreamExchange::new().with_reply(server(1), reply.clone()));
    let forwarder = ProxyForwarder::new(vec![server(1), server(2)], mock.clone());

    let response = forwarder.forward(&request).await.unwrap();

    assert_eq!(response.answers(), reply.answers());
    assert_eq!(mock.calls(), vec![server(1)]);
}

#[tokio::test]
async fn test_fails_over_in_order() {
    let request = query_message("example.org.", RecordType::A);
    let good = upstream_reply(&request, Ipv4Addr::new(203, 0, 113, 9));
    let mock = Arc::new(
        MockUpstreamExchange::new()
            .with_failure(
                server(1),
                DomainError::Transport {
                    server: server(1).to_string(),
                    reason: "connection refused".into(),
                },
            )
            .with_reply(server(3), good.clone()),
    );
    let forwarder = ProxyForwarder::new(vec![server(1), server(2), server(3)], mock.clone());

    let response = forwarder.forward(&request).await.unwrap();

    assert_eq!(response.answers(), good.answers());
    assert_eq!(mock.calls(), vec![server(1), server(2), server(3)]);
}

#[tokio::test]
async fn test_all_upstreams_failing() {
    let mock = Arc::new(MockUpstreamExchange::new());
    let forwarder = ProxyForwarder::new(vec![server(1), server(2)], mock.clone());

    let result = forwarder.forward(&query_message("example.org.", RecordType::A)).await;

    assert_eq!(result.unwrap_err(), DomainError::AllUpstreamsFailed);
    assert_eq!(mock.calls(), vec![server(1), server(2)]);
}

#[tokio::test]
async fn test_empty_upstream_list_fails() {
    let mock = Arc::new(MockUpstreamExchange::new());
    let forwarder = ProxyForwarder::new(Vec::new(), mock.clone());
    assert!(forwarder.is_enabled());

    let result = forwarder.forward(&query_message("example.org.", RecordType::A)).await;

    assert_eq!(result.unwrap_err(), DomainError::AllUpstreamsFailed);
    assert!(mock.calls().is_empty());
}
