//! mockdns domain layer
pub mod config;
pub mod dns_name;
pub mod errors;
pub mod query_outcome;
pub mod record_type;
pub mod zone_document;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use query_outcome::{QueryOutcome, QueryRoute};
pub use record_type::RecordType;
pub use zone_document::{DomainEntry, RecordFields, ZoneDocument};
