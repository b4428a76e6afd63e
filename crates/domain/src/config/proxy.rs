use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProxyConfig {
    /// Forward queries with no local match to the system resolvers.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_resolv_conf")]
    pub resolv_conf: String,

    #[serde(default = "default_upstream_port")]
    pub upstream_port: u16,

    /// Per-exchange timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            resolv_conf: default_resolv_conf(),
            upstream_port: default_upstream_port(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_resolv_conf() -> String {
    "/etc/resolv.conf".to_string()
}

fn default_upstream_port() -> u16 {
    53
}

fn default_timeout_ms() -> u64 {
    5000
}
