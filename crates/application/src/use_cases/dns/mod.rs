pub mod forward_query;
pub mod handle_dns_query;
pub mod resolve_local;

pub use forward_query::ProxyForwarder;
pub use handle_dns_query::{HandleDnsQueryUseCase, QueryResolution};
pub use resolve_local::{QueryResolver, ResponseSections};
