//! UDP transport for upstream queries (RFC 1035 §4.2.1).
//!
//! Messages are sent without framing. A reply with the TC bit set is
//! returned as-is; the caller decides whether to retry over TCP.

use super::{io_error, timeout_error, TransportResponse};
use mockdns_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn bind_addr(&self) -> SocketAddr {
        if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }

    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let server = self.server_addr;

        let socket = UdpSocket::bind(self.bind_addr())
            .await
            .map_err(|e| io_error(server, "bind UDP socket", e))?;

        let bytes_sent = tokio::time::timeout(timeout, socket.send_to(message_bytes, server))
            .await
            .map_err(|_| timeout_error(server))?
            .map_err(|e| io_error(server, "send UDP query", e))?;

        debug!(server = %server, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        // Datagrams from other sources are dropped, the deadline still applies.
        let bytes_received = tokio::time::timeout(timeout, async {
            loop {
                let (len, from) = socket.recv_from(&mut recv_buf).await?;
                if from == server {
                    return Ok::<usize, std::io::Error>(len);
                }
                warn!(expected = %server, received_from = %from, "UDP response from unexpected source");
            }
        })
        .await
        .map_err(|_| timeout_error(server))?
        .map_err(|e| io_error(server, "receive UDP response", e))?;

        recv_buf.truncate(bytes_received);

        debug!(server = %server, bytes_received, "UDP response received");

        Ok(TransportResponse {
            bytes: recv_buf,
            protocol_used: "UDP",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_family_follows_server() {
        let v4 = UdpTransport::new("192.0.2.53:53".parse().unwrap());
        assert!(v4.bind_addr().is_ipv4());

        let v6 = UdpTransport::new("[2001:db8::53]:53".parse().unwrap());
        assert!(v6.bind_addr().is_ipv6());
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let transport = UdpTransport::new(silent.local_addr().unwrap());

        let result = transport.send(&[0u8; 12], Duration::from_millis(50)).await;

        assert!(matches!(result, Err(DomainError::TransportTimeout { .. })));
    }
}
