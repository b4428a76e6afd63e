pub mod upstream_exchange;

pub use upstream_exchange::UpstreamExchange;
