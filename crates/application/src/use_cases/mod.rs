pub mod dns;

pub use dns::{
    HandleDnsQueryUseCase, ProxyForwarder, QueryResolution, QueryResolver, ResponseSections,
};
