use async_trait::async_trait;
use hickory_proto::op::Message;
use mockdns_domain::DomainError;
use std::net::SocketAddr;

/// One request/response exchange with an upstream resolver.
///
/// Implementations enforce their own timeout; an `Err` means the server
/// should be skipped.
#[async_trait]
pub trait UpstreamExchange: Send + Sync {
    async fn exchange(&self, server: SocketAddr, query: &Message) -> Result<Message, DomainError>;
}
