use crate::ports::UpstreamExchange;
use hickory_proto::op::Message;
use mockdns_domain::DomainError;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Sequential failover across the configured upstream resolvers.
pub struct ProxyForwarder {
    upstreams: Vec<SocketAddr>,
    exchange: Option<Arc<dyn UpstreamExchange>>,
}

impl ProxyForwarder {
    pub fn new(upstreams: Vec<SocketAddr>, exchange: Arc<dyn UpstreamExchange>) -> Self {
        Self {
            upstreams,
            exchange: Some(exchange),
        }
    }

    /// A forwarder that refuses every query with [`DomainError::NotProxied`].
    pub fn disabled() -> Self {
        Self {
            upstreams: Vec::new(),
            exchange: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.exchange.is_some()
    }

    /// Tries each upstream in order and returns the first reply as received.
    pub async fn forward(&self, query: &Message) -> Result<Message, DomainError> {
        let exchange = self.exchange.as_ref().ok_or(DomainError::NotProxied)?;

        debug!(strategy = "failover", servers = self.upstreams.len(), "Forwarding query");

        for (index, server) in self.upstreams.iter().enumerate() {
            match exchange.exchange(*server, query).await {
                Ok(response) => {
                    debug!(server = %server, position = index, "Upstream responded");
                    return Ok(response);
                }
                Err(e) => {
                    warn!(server = %server, error = %e, position = index, "Failing over");
                }
            }
        }

        Err(DomainError::AllUpstreamsFailed)
    }
}
