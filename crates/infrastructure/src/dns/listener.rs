use super::server::MockDnsHandler;
use hickory_server::ServerFuture;
use mockdns_domain::DomainError;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

const TCP_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Udp,
    Tcp,
}

impl Protocol {
    pub const ALL: [Protocol; 2] = [Protocol::Tcp, Protocol::Udp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Udp => "udp",
            Protocol::Tcp => "tcp",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerState {
    Starting,
    Running,
    ShuttingDown,
    Stopped,
}

enum BoundSocket {
    Udp(UdpSocket),
    Tcp(TcpListener),
}

/// One bound transport serving DNS until cancelled.
pub struct DnsListener {
    protocol: Protocol,
    socket: BoundSocket,
    state: ListenerState,
}

impl DnsListener {
    pub async fn bind(protocol: Protocol, addr: SocketAddr) -> Result<Self, DomainError> {
        let bind_error = |e: std::io::Error| DomainError::Transport {
            server: addr.to_string(),
            reason: format!("bind {}: {}", protocol, e),
        };

        let socket = match protocol {
            Protocol::Udp => BoundSocket::Udp(UdpSocket::bind(addr).await.map_err(bind_error)?),
            Protocol::Tcp => BoundSocket::Tcp(TcpListener::bind(addr).await.map_err(bind_error)?),
        };

        Ok(Self {
            protocol,
            socket,
            state: ListenerState::Starting,
        })
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn state(&self) -> ListenerState {
        self.state
    }

    pub fn local_addr(&self) -> Result<SocketAddr, DomainError> {
        let addr = match &self.socket {
            BoundSocket::Udp(s) => s.local_addr(),
            BoundSocket::Tcp(l) => l.local_addr(),
        };
        addr.map_err(|e| DomainError::Transport {
            server: self.protocol.to_string(),
            reason: format!("local address unavailable: {}", e),
        })
    }

    /// Serves until the token is cancelled or the transport fails, and
    /// returns the terminal state.
    pub async fn serve(self, handler: MockDnsHandler, token: CancellationToken) -> ListenerState {
        let local_addr = self.local_addr().ok();
        let DnsListener {
            protocol,
            socket,
            mut state,
        } = self;

        let mut server = ServerFuture::new(handler);
        match socket {
            BoundSocket::Udp(socket) => server.register_socket(socket),
            BoundSocket::Tcp(listener) => server.register_listener(listener, TCP_REQUEST_TIMEOUT),
        }
        transition(protocol, &mut state, ListenerState::Running);
        info!(protocol = %protocol, address = ?local_addr, "DNS listener running");

        let cancelled = tokio::select! {
            result = server.block_until_done() => {
                if let Err(e) = result {
                    error!(protocol = %protocol, error = %e, "DNS listener failed");
                }
                false
            }
            _ = token.cancelled() => true,
        };

        if cancelled {
            transition(protocol, &mut state, ListenerState::ShuttingDown);
            if let Err(e) = server.shutdown_gracefully().await {
                error!(protocol = %protocol, error = %e, "DNS listener did not stop cleanly");
            }
        }

        transition(protocol, &mut state, ListenerState::Stopped);
        info!(protocol = %protocol, "DNS listener stopped");
        state
    }
}

fn transition(protocol: Protocol, state: &mut ListenerState, next: ListenerState) {
    debug!(protocol = %protocol, from = ?state, to = ?next, "Listener state change");
    *state = next;
}

/// Binds TCP and UDP on `addr` and serves both until `token` is cancelled.
/// A transport that fails to bind is logged and skipped; if neither binds
/// there is nothing to serve and an error is returned.
pub async fn serve_all(
    addr: SocketAddr,
    handler: MockDnsHandler,
    token: CancellationToken,
) -> Result<(), DomainError> {
    let mut join_set: JoinSet<ListenerState> = JoinSet::new();

    for protocol in Protocol::ALL {
        match DnsListener::bind(protocol, addr).await {
            Ok(listener) => {
                let handler = handler.clone();
                let token = token.clone();
                join_set.spawn(listener.serve(handler, token));
            }
            Err(e) => {
                error!(protocol = %protocol, bind_address = %addr, error = %e, "Failed to start DNS listener");
            }
        }
    }

    if join_set.is_empty() {
        return Err(DomainError::Transport {
            server: addr.to_string(),
            reason: "no DNS listener could be bound".to_string(),
        });
    }

    info!(bind_address = %addr, listeners = join_set.len(), "DNS server ready");

    while let Some(result) = join_set.join_next().await {
        if let Err(e) = result {
            error!(error = %e, "DNS listener task aborted");
        }
    }

    Ok(())
}
