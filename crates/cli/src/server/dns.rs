use mockdns_infrastructure::dns::{serve_all, MockDnsHandler};
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Runs the TCP and UDP listeners until `shutdown` is cancelled and both
/// have stopped. Fails when neither transport could be bound.
pub async fn start_dns_server(
    bind_addr: SocketAddr,
    handler: MockDnsHandler,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    info!(bind_address = %bind_addr, "Starting DNS server");
    serve_all(bind_addr, handler, shutdown).await?;
    Ok(())
}
