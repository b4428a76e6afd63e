pub mod query_logger;
pub mod record_store;
pub mod record_type_map;
pub mod zone_normalizer;

pub use query_logger::QueryLogger;
pub use record_store::{RecordSet, RecordStore};
pub use record_type_map::RecordTypeMapper;
pub use zone_normalizer::ZoneNormalizer;
