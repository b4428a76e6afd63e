use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed record {line:?}: {reason}")]
    MalformedRecord { line: String, reason: String },

    #[error("Failed to load zone data: {0}")]
    ZoneLoad(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Resolver configuration error: {0}")]
    ResolverConfig(String),

    #[error("Query not proxied: forwarding is disabled")]
    NotProxied,

    #[error("All upstream servers failed")]
    AllUpstreamsFailed,
}
