use super::codec::WireCodec;
use super::transport::Transport;
use async_trait::async_trait;
use hickory_proto::op::Message;
use mockdns_application::ports::UpstreamExchange;
use mockdns_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

/// Sends a client query to one upstream resolver over UDP, falling back to
/// TCP when the UDP reply comes back truncated.
pub struct UpstreamClient {
    timeout: Duration,
}

impl UpstreamClient {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    async fn round_trip(
        &self,
        transport: Transport,
        bytes: &[u8],
        expected_id: u16,
    ) -> Result<Message, DomainError> {
        let response = transport.send(bytes, self.timeout).await?;
        let message = WireCodec::decode(&response.bytes)?;

        if message.id() != expected_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "{} reply id {} does not match query id {}",
                response.protocol_used,
                message.id(),
                expected_id
            )));
        }

        Ok(message)
    }
}

#[async_trait]
impl UpstreamExchange for UpstreamClient {
    async fn exchange(&self, server: SocketAddr, query: &Message) -> Result<Message, DomainError> {
        let mut outgoing = query.clone();
        let upstream_id = fastrand::u16(..);
        outgoing.set_header(*outgoing.header().clone().set_id(upstream_id));
        let bytes = WireCodec::encode(&outgoing)?;

        let mut response = self
            .round_trip(Transport::udp(server), &bytes, upstream_id)
            .await?;

        if response.truncated() {
            debug!(server = %server, "Truncated UDP reply, retrying over TCP");
            response = self
                .round_trip(Transport::tcp(server), &bytes, upstream_id)
                .await?;
        }

        response.set_header(*response.header().clone().set_id(query.id()));
        Ok(response)
    }
}
