//! mockdns application layer: record store, zone normalization, query
//! resolution and upstream forwarding.
pub mod ports;
pub mod services;
pub mod use_cases;
