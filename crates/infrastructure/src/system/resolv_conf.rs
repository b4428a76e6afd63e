use mockdns_domain::DomainError;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tokio::fs;
use tracing::{debug, warn};

/// Reads upstream name servers from a resolv.conf-style file.
pub struct ResolvConfReader {
    path: PathBuf,
}

impl ResolvConfReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read_nameservers(&self) -> Result<Vec<IpAddr>, DomainError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::ResolverConfig(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(parse_nameservers(&content))
    }

    /// Name servers in file order, each paired with `port`. An empty list is
    /// an error.
    pub async fn upstreams(&self, port: u16) -> Result<Vec<SocketAddr>, DomainError> {
        let servers: Vec<SocketAddr> = self
            .read_nameservers()
            .await?
            .into_iter()
            .map(|ip| SocketAddr::new(ip, port))
            .collect();

        if servers.is_empty() {
            return Err(DomainError::ResolverConfig(format!(
                "No nameserver entries in {}",
                self.path.display()
            )));
        }

        debug!(path = %self.path.display(), servers = servers.len(), "Upstream resolvers loaded");
        Ok(servers)
    }
}

// nameserver 192.0.2.53
// nameserver 2001:db8::53
pub fn parse_nameservers(content: &str) -> Vec<IpAddr> {
    let mut servers = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        let mut fields = line.split_whitespace();
        if fields.next() != Some("nameserver") {
            continue;
        }

        let Some(addr) = fields.next() else {
            warn!(line, "nameserver line without an address");
            continue;
        };

        match IpAddr::from_str(addr) {
            Ok(ip) => servers.push(ip),
            Err(e) => warn!(error = %e, address = addr, "Invalid nameserver address"),
        }
    }

    servers
}
