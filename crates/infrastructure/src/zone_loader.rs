use mockdns_application::services::{RecordStore, ZoneNormalizer};
use mockdns_domain::{DomainError, ZoneDocument};
use std::path::Path;
use tokio::fs;
use tracing::{error, info};

/// Loads the JSON record document from disk into a [`RecordStore`].
pub struct ZoneLoader {
    normalizer: ZoneNormalizer,
}

impl ZoneLoader {
    pub fn new(default_ttl: impl Into<String>) -> Self {
        Self {
            normalizer: ZoneNormalizer::new(default_ttl),
        }
    }

    pub fn parse_document(json: &str) -> Result<ZoneDocument, DomainError> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::ZoneLoad(format!("Invalid record document: {}", e)))
    }

    pub async fn load(&self, path: &Path) -> Result<RecordStore, DomainError> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            error!(path = %path.display(), error = %e, "Failed to read record document");
            DomainError::ZoneLoad(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let document = Self::parse_document(&content)?;
        let store = self.normalizer.normalize(&document)?;

        info!(
            path = %path.display(),
            domains = store.len(),
            records = store.record_count(),
            "Record document loaded"
        );

        Ok(store)
    }
}
