pub mod tcp;
pub mod udp;

use mockdns_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

/// One request/response exchange with a single upstream server.
pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

impl Transport {
    pub fn udp(server: SocketAddr) -> Self {
        Self::Udp(udp::UdpTransport::new(server))
    }

    pub fn tcp(server: SocketAddr) -> Self {
        Self::Tcp(tcp::TcpTransport::new(server))
    }

    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        match self {
            Self::Udp(t) => t.send(message_bytes, timeout).await,
            Self::Tcp(t) => t.send(message_bytes, timeout).await,
        }
    }
}

pub(crate) fn timeout_error(server: SocketAddr) -> DomainError {
    DomainError::TransportTimeout {
        server: server.to_string(),
    }
}

pub(crate) fn io_error(server: SocketAddr, action: &str, e: std::io::Error) -> DomainError {
    DomainError::Transport {
        server: server.to_string(),
        reason: format!("{}: {}", action, e),
    }
}
