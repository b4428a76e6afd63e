use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneConfig {
    /// Path of the JSON record document.
    #[serde(default)]
    pub data_file: Option<String>,

    /// TTL written into records that do not declare one.
    #[serde(default = "default_ttl")]
    pub default_ttl: String,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            default_ttl: default_ttl(),
        }
    }
}

fn default_ttl() -> String {
    "3600".to_string()
}
