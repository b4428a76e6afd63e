pub mod codec;
pub mod listener;
pub mod server;
pub mod transport;
pub mod upstream_client;

pub use codec::WireCodec;
pub use listener::{serve_all, DnsListener, ListenerState, Protocol};
pub use server::MockDnsHandler;
pub use upstream_client::UpstreamClient;
