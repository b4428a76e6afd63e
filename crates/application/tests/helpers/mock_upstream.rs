use async_trait::async_trait;
use hickory_proto::op::Message;
use mockdns_application::ports::UpstreamExchange;
use mockdns_domain::DomainError;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Mutex;

/// Upstream exchange with canned per-server replies. Servers without a
/// canned reply time out.
pub struct MockUpstreamExchange {
    replies: HashMap<SocketAddr, Result<Message, DomainError>>,
    calls: Mutex<Vec<SocketAddr>>,
}

impl MockUpstreamExchange {
    pub fn new() -> Self {
        Self {
            replies: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_reply(mut self, server: SocketAddr, reply: Message) -> Self {
        self.replies.insert(server, Ok(reply));
        self
    }

    pub fn with_failure(mut self, server: SocketAddr, error: DomainError) -> Self {
        self.replies.insert(server, Err(error));
        self
    }

    pub fn calls(&self) -> Vec<SocketAddr> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamExchange for MockUpstreamExchange {
    async fn exchange(&self, server: SocketAddr, _query: &Message) -> Result<Message, DomainError> {
        self.calls.lock().unwrap().push(server);
        match self.replies.get(&server) {
            Some(reply) => reply.clone(),
            None => Err(DomainError::TransportTimeout {
                server: server.to_string(),
            }),
        }
    }
}
