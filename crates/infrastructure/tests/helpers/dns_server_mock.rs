use hickory_proto::op::{Message, MessageType};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use mockdns_infrastructure::dns::transport::tcp::{read_with_length_prefix, send_with_length_prefix};
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

#[derive(Debug, Clone, Copy)]
pub enum MockBehavior {
    /// NOERROR with one A record.
    Answer(Ipv4Addr),
    /// TC set over UDP, full answer over TCP.
    Truncated(Ipv4Addr),
    /// Reply whose id does not match the query.
    WrongId,
}

/// A local upstream resolver for exercising the real transports.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let tcp = match behavior {
            MockBehavior::Truncated(_) => Some(TcpListener::bind(addr).await?),
            _ => None,
        };

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(reply) = Self::build_reply(&buf[..len], behavior, false) {
                                let _ = socket.send_to(&reply, peer).await;
                            }
                        }
                    }
                    accepted = accept(tcp.as_ref()) => {
                        if let Ok((mut stream, _)) = accepted {
                            tokio::spawn(async move {
                                if let Ok(query) = read_with_length_prefix(&mut stream).await {
                                    if let Some(reply) = Self::build_reply(&query, behavior, true) {
                                        let _ = send_with_length_prefix(&mut stream, &reply).await;
                                    }
                                }
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn build_reply(query: &[u8], behavior: MockBehavior, over_tcp: bool) -> Option<Vec<u8>> {
        let request = Message::from_vec(query).ok()?;
        let mut reply = Message::new(request.id(), MessageType::Response, request.op_code());
        reply.set_recursion_desired(request.recursion_desired());
        reply.set_recursion_available(true);
        reply.add_queries(request.queries().iter().cloned());

        let owner = request
            .queries()
            .first()
            .map(|q| q.name().clone())
            .unwrap_or_else(Name::root);

        match behavior {
            MockBehavior::Answer(ip) => {
                reply.add_answer(Record::from_rdata(owner, 60, RData::A(A(ip))));
            }
            MockBehavior::Truncated(ip) if over_tcp => {
                reply.add_answer(Record::from_rdata(owner, 60, RData::A(A(ip))));
            }
            MockBehavior::Truncated(_) => {
                reply.set_truncated(true);
            }
            MockBehavior::WrongId => {
                reply.set_header(*reply.header().clone().set_id(request.id().wrapping_add(1)));
            }
        }

        let mut buf = Vec::new();
        let mut encoder = BinEncoder::new(&mut buf);
        reply.emit(&mut encoder).ok()?;
        Some(buf)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn accept(
    listener: Option<&TcpListener>,
) -> std::io::Result<(tokio::net::TcpStream, SocketAddr)> {
    match listener {
        Some(listener) => listener.accept().await,
        None => std::future::pending().await,
    }
}
