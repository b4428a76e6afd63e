use mockdns_application::services::RecordStore;
use mockdns_domain::Config;
use mockdns_infrastructure::system::ResolvConfReader;
use mockdns_infrastructure::ZoneLoader;
use std::net::SocketAddr;
use std::path::Path;
use tracing::{error, info};

pub async fn load_zone(config: &Config) -> anyhow::Result<RecordStore> {
    let data_file = config
        .zone
        .data_file
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("Data file required"))?;

    let loader = ZoneLoader::new(config.zone.default_ttl.clone());
    loader.load(Path::new(data_file)).await.map_err(|e| {
        error!(path = data_file, error = %e, "Failed to load record document");
        anyhow::anyhow!(e)
    })
}

/// Upstream resolvers for forwarding; empty when forwarding is disabled.
pub async fn load_upstreams(config: &Config) -> anyhow::Result<Vec<SocketAddr>> {
    if !config.proxy.enabled {
        info!("Forwarding disabled, unknown domains get SERVFAIL");
        return Ok(Vec::new());
    }

    let reader = ResolvConfReader::new(&config.proxy.resolv_conf);
    let upstreams = reader
        .upstreams(config.proxy.upstream_port)
        .await
        .map_err(|e| {
            error!(path = %config.proxy.resolv_conf, error = %e, "Failed to read upstream resolvers");
            anyhow::anyhow!(e)
        })?;

    info!(servers = ?upstreams, "Forwarding unknown domains upstream");
    Ok(upstreams)
}
