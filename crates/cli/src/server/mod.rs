pub mod dns;
pub mod signal;

pub use dns::start_dns_server;
pub use signal::spawn_signal_handler;
